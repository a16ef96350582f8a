//! Legacy tags for the image extension
//!
//! The image transforms live outside the core API. Identifiers are plain
//! strings so the table can be built without the extension being linked;
//! only dispatching a decode needs the concrete types registered.

use super::tables::LegacyTable;

pub const IMAGE_TRANSFORM: LegacyTable = &[
    ("EqualizeHistTransform", "org.datavec.image.transform.EqualizeHistTransform"),
    ("RotateImageTransform", "org.datavec.image.transform.RotateImageTransform"),
    ("ColorConversionTransform", "org.datavec.image.transform.ColorConversionTransform"),
    ("WarpImageTransform", "org.datavec.image.transform.WarpImageTransform"),
    ("BoxImageTransform", "org.datavec.image.transform.BoxImageTransform"),
    ("CropImageTransform", "org.datavec.image.transform.CropImageTransform"),
    ("FilterImageTransform", "org.datavec.image.transform.FilterImageTransform"),
    ("FlipImageTransform", "org.datavec.image.transform.FlipImageTransform"),
    ("LargestBlobCropTransform", "org.datavec.image.transform.LargestBlobCropTransform"),
    ("ResizeImageTransform", "org.datavec.image.transform.ResizeImageTransform"),
    ("RandomCropTransform", "org.datavec.image.transform.RandomCropTransform"),
    ("ScaleImageTransform", "org.datavec.image.transform.ScaleImageTransform"),
];
