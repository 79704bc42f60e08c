//! Fixed values shared by the sidecar generator.
//!
//! Every sidecar gets the same content; nothing here varies per image.

/// Extension (after the final `.`) that marks a file as a texture image
pub const IMAGE_EXTENSION: &str = "png";

/// Extension given to generated sidecars
pub const SIDECAR_EXTENSION: &str = "xml";

/// Characters removed from the end of an image file name to get the sidecar base name.
/// Matches `.png`; other extension lengths would be cut at the wrong place.
pub const STRIPPED_SUFFIX_LEN: usize = 4;

/// First line of a valid sidecar
pub const MARKER_LINE: &str = "<texture>";

/// Full sidecar content, written verbatim
pub const TEXTURE_XML: &str = "<texture>
\t<mipmap enable=\"false\" />
\t<quality high=\"0\" />
\t<srgb enable=\"false\" />
</texture>
";
