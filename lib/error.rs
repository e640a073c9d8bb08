use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("{shape} #{index} references unknown material {material} (table has {available})")]
    UnknownMaterial {
        shape: &'static str,
        index: usize,
        material: usize,
        available: usize,
    },

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("sample count must be at least 1")]
    NoSamples,

    #[error("camera eye and look-at point coincide, or up is parallel to the view direction")]
    DegenerateCamera,
}

#[derive(Error, Debug)]
pub enum FilmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("film is {film_width}x{film_height} but {pixels} pixels are stored")]
    SizeMismatch { film_width: u32, film_height: u32, pixels: usize },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Film(#[from] FilmError),
}

pub type RenderResult<T> = Result<T, RenderError>;
