/// A container image reference split into its display parts.
///
/// Parsing is total: every input string, including malformed references and
/// the empty string, deterministically produces a well-formed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// The original reference, byte-for-byte.
    pub full: String,
    /// Repository path without tag or digest.
    pub name: String,
    /// Last path segment of `name`.
    pub short_name: String,
    /// Tag, truncated digest, or the literal "latest".
    pub version: String,
}

const DIGEST_SEPARATOR: &str = "@sha256:";
const SHORT_DIGEST_LEN: usize = 12;

impl ImageReference {
    pub fn parse(image: &str) -> Self {
        let (name, version) = if let Some((before, hex)) = image.split_once(DIGEST_SEPARATOR) {
            let short: String = hex.chars().take(SHORT_DIGEST_LEN).collect();
            (before.to_string(), format!("sha256:{}", short))
        } else if let Some(idx) = image.rfind(':') {
            let after_colon = &image[idx + 1..];
            if after_colon.contains('/') {
                // Colon belongs to a registry host:port, not a tag.
                (image.to_string(), "latest".to_string())
            } else {
                (image[..idx].to_string(), after_colon.to_string())
            }
        } else {
            (image.to_string(), "latest".to_string())
        };

        let short_name = name.rsplit('/').next().unwrap_or("").to_string();

        Self {
            full: image.to_string(),
            name,
            short_name,
            version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name() {
        let img = ImageReference::parse("nginx");
        assert_eq!(img.full, "nginx");
        assert_eq!(img.name, "nginx");
        assert_eq!(img.short_name, "nginx");
        assert_eq!(img.version, "latest");
    }

    #[test]
    fn test_simple_tag() {
        let img = ImageReference::parse("nginx:1.25");
        assert_eq!(img.name, "nginx");
        assert_eq!(img.short_name, "nginx");
        assert_eq!(img.version, "1.25");
    }

    #[test]
    fn test_namespaced_tag() {
        let img = ImageReference::parse("myrepo/myimage:v2");
        assert_eq!(img.name, "myrepo/myimage");
        assert_eq!(img.short_name, "myimage");
        assert_eq!(img.version, "v2");
    }

    #[test]
    fn test_registry_port_without_tag() {
        let img = ImageReference::parse("registry.example.com:5000/team/app");
        assert_eq!(img.name, "registry.example.com:5000/team/app");
        assert_eq!(img.short_name, "app");
        assert_eq!(img.version, "latest");
    }

    #[test]
    fn test_registry_port_with_tag() {
        let img = ImageReference::parse("registry.example.com:5000/team/app:v3");
        assert_eq!(img.name, "registry.example.com:5000/team/app");
        assert_eq!(img.short_name, "app");
        assert_eq!(img.version, "v3");
    }

    #[test]
    fn test_digest_is_truncated() {
        let img = ImageReference::parse("ghcr.io/org/app@sha256:abcdef0123456789abcdef");
        assert_eq!(img.name, "ghcr.io/org/app");
        assert_eq!(img.short_name, "app");
        assert_eq!(img.version, "sha256:abcdef012345");
    }

    #[test]
    fn test_short_digest_is_not_padded() {
        let img = ImageReference::parse("app@sha256:abc");
        assert_eq!(img.version, "sha256:abc");
    }

    #[test]
    fn test_digest_takes_precedence_over_port_colon() {
        let img = ImageReference::parse("registry.example.com:5000/team/app@sha256:0123456789abcdef");
        assert_eq!(img.name, "registry.example.com:5000/team/app");
        assert_eq!(img.short_name, "app");
        assert_eq!(img.version, "sha256:0123456789ab");
    }

    #[test]
    fn test_empty_string() {
        let img = ImageReference::parse("");
        assert_eq!(img.full, "");
        assert_eq!(img.name, "");
        assert_eq!(img.short_name, "");
        assert_eq!(img.version, "latest");
    }

    #[test]
    fn test_trailing_colon_passes_through() {
        let img = ImageReference::parse("nginx:");
        assert_eq!(img.name, "nginx");
        assert_eq!(img.short_name, "nginx");
        assert_eq!(img.version, "");
    }

    #[test]
    fn test_trailing_slash_yields_empty_short_name() {
        let img = ImageReference::parse("myrepo/");
        assert_eq!(img.name, "myrepo/");
        assert_eq!(img.short_name, "");
        assert_eq!(img.version, "latest");
    }

    #[test]
    fn test_full_is_unmodified() {
        let raw = " Registry.Example.COM:5000/Team/App:V2 ";
        assert_eq!(ImageReference::parse(raw).full, raw);
    }

    #[test]
    fn test_unicode_input_does_not_panic() {
        let img = ImageReference::parse("héllo/wörld@sha256:ümlaut-digest-text");
        assert_eq!(img.name, "héllo/wörld");
        assert_eq!(img.short_name, "wörld");
        assert_eq!(img.version, "sha256:ümlaut-diges");
    }

    #[test]
    fn test_repeated_parse_is_value_equal() {
        let a = ImageReference::parse("myrepo/myimage:v2");
        let b = ImageReference::parse("myrepo/myimage:v2");
        assert_eq!(a, b);
    }
}
