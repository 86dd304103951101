mod contrast;
mod conversion;
mod difference;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{
    to_contrast, to_contrast_luminance, to_contrast_ratio, to_relative_luminance,
};

// conversion
pub use conversion::{linear_to_srgb, srgb_to_linear};
pub(crate) use conversion::{
    from_24bit, hsl_to_srgb, lab_to_lch, lab_to_xyz, lch_to_lab, srgb_to_hsl, srgb_to_xyz,
    to_24bit, xyz_to_lab, xyz_to_srgb,
};

// difference
pub use difference::{delta_e2000, delta_e76, delta_e94};

// equality
pub use equality::close_enough;

// math
pub(crate) use math::{lerp, multiply};
pub use math::{clamp, normalize_hue, round_to, to_degrees, to_radians};

// string
pub(crate) use string::parse;
pub use string::{hex_to_rgb, rgb_to_hex};
