/// Resuelve la URL de una imagen devuelta por el backend.
///
/// Las URLs absolutas (con esquema) se devuelven tal cual; las rutas relativas
/// se prefijan con la URL base, con una sola `/` entre ambas.
pub fn resolve_image_url(base_url: &str, image: &str) -> String {
    if has_scheme(image) {
        return image.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        image.trim_start_matches('/')
    )
}

fn has_scheme(url: &str) -> bool {
    // `blob:` puede llevar otra URL dentro (`blob:http://...`)
    if url.starts_with("data:") || url.starts_with("blob:") {
        return true;
    }
    match url.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_untouched() {
        assert_eq!(
            resolve_image_url("http://localhost:5000", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            resolve_image_url("http://localhost:5000", "blob:http://localhost/1234"),
            "blob:http://localhost/1234"
        );
    }

    #[test]
    fn data_urls_are_untouched() {
        let inline = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(resolve_image_url("http://localhost:5000", inline), inline);
    }

    #[test]
    fn relative_paths_get_the_base_url() {
        assert_eq!(
            resolve_image_url("http://localhost:5000", "/uploads/a.png"),
            "http://localhost:5000/uploads/a.png"
        );
        assert_eq!(
            resolve_image_url("http://localhost:5000/", "uploads/a.png"),
            "http://localhost:5000/uploads/a.png"
        );
    }
}
