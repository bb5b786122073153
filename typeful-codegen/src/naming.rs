//! Interface naming for generated declarations.

/// Derive a TypeScript interface name from a content-type identifier.
///
/// Capitalizes the first character, removes every hyphen while capitalizing
/// the character that follows it, and prepends the prefix unmodified:
/// `to_interface_name("blog-post", "CMS")` is `"CMSBlogPost"`.
///
/// Deterministic and collision-free for well-formed kebab-case identifiers;
/// other separators pass through untouched.
pub fn to_interface_name(id: &str, prefix: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + id.len());
    name.push_str(prefix);

    let mut capitalize = true;
    for c in id.chars() {
        if c == '-' {
            capitalize = true;
        } else if capitalize {
            name.extend(c.to_uppercase());
            capitalize = false;
        } else {
            name.push(c);
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_interface_name("blog-post", ""), "BlogPost");
        assert_eq!(to_interface_name("hero-banner-v2", ""), "HeroBannerV2");
    }

    #[test]
    fn test_prefix_is_prepended_unmodified() {
        assert_eq!(to_interface_name("blog-post", "CMS"), "CMSBlogPost");
        assert_eq!(to_interface_name("post", "contentful"), "contentfulPost");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(to_interface_name("post", ""), "Post");
        assert_eq!(to_interface_name("Post", ""), "Post");
    }

    #[test]
    fn test_inner_casing_is_preserved() {
        assert_eq!(to_interface_name("blogPost", ""), "BlogPost");
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(to_interface_name("", ""), "");
        assert_eq!(to_interface_name("", "CMS"), "CMS");
    }

    #[test]
    fn test_digits_after_hyphen() {
        assert_eq!(to_interface_name("page-404", ""), "Page404");
    }
}
