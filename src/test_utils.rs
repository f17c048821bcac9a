#[cfg(test)]
pub mod fixtures {
    use std::{io::Cursor, path::Path};

    use crate::repositories::StaticQuizCatalog;

    /// The quiz catalog shipped in `data/quizzes.json`
    pub fn bundled_catalog() -> StaticQuizCatalog {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/quizzes.json");
        StaticQuizCatalog::load(&path).expect("bundled quiz data should load")
    }

    /// A 1x1 PNG, enough for anything that only needs decodable image bytes
    pub fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([120, 180, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .expect("encoding a 1x1 png should succeed");
        out.into_inner()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_bundled_catalog_loads() {
        let _ = bundled_catalog();
    }

    #[test]
    fn test_fixtures_tiny_png_decodes() {
        let decoded = image::load_from_memory(&tiny_png()).unwrap();
        assert_eq!(decoded.width(), 1);
    }
}
