//! Multi-density export into an asset catalog.

mod imageset;

pub use imageset::{Contents, Density, ImageEntry, Imageset, Info, CONTENTS_FILENAME};
