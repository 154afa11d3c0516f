use super::*;
use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::AllowedOrigins;

fn options() -> CorsOptions {
    CorsOptions {
        origins: AllowedOrigins::list(["https://allowed.test"]),
        methods: AllowedMethods::list(["GET", "POST"]),
        headers: AllowedHeaders::list(["Content-Type", "X-Trace"]),
    }
}

mod build_origin_header {
    use super::*;

    #[test]
    fn should_emit_wildcard_given_any_decision() {
        // Arrange
        let options = options();
        let builder = HeaderBuilder::new(&options);

        // Act
        let headers = builder.build_origin_header(OriginDecision::Any);

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
    }

    #[test]
    fn should_echo_request_origin_given_mirror_decision() {
        // Arrange
        let options = options();
        let builder = HeaderBuilder::new(&options);

        // Act
        let headers = builder.build_origin_header(OriginDecision::Mirror("https://allowed.test"));

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://allowed.test")
        );
    }
}

mod build {
    use super::*;

    #[test]
    fn should_emit_three_headers_in_fixed_order() {
        // Arrange
        let options = options();
        let builder = HeaderBuilder::new(&options);

        // Act
        let headers = builder.build(OriginDecision::Mirror("https://allowed.test"));

        // Assert
        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(
            entries,
            vec![
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://allowed.test"),
                (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST"),
                (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, X-Trace"),
            ]
        );
    }

    #[test]
    fn should_emit_empty_lists_given_default_methods_and_headers() {
        // Arrange
        let options = CorsOptions {
            origins: AllowedOrigins::any(),
            ..CorsOptions::default()
        };
        let builder = HeaderBuilder::new(&options);

        // Act
        let headers = builder.build(OriginDecision::Any);

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS), Some(""));
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS), Some(""));
    }
}
