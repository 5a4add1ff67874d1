use crate::dom::Element;

/// Caller-supplied remapping from a heading's nominal level to its nesting
/// depth. Receives the element too, so the mapping can depend on attributes.
pub type DepthOverrideFn = Box<dyn Fn(u8, &Element) -> u8>;

/// Resolve the effective nesting depth for a heading. Without an override the
/// depth is the level itself; with one, the result is clamped to [1,6] rather
/// than treated as an error.
pub fn resolve_depth(level: u8, elem: &Element, override_fn: Option<&DepthOverrideFn>) -> u8 {
    match override_fn {
        Some(f) => f(level, elem).clamp(1, 6),
        None => level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_without_override() {
        let h5 = Element::new("h5");
        assert_eq!(resolve_depth(5, &h5, None), 5);
    }

    #[test]
    fn test_override_remaps() {
        let f: DepthOverrideFn = Box::new(|lv, _| if lv == 5 { 3 } else { lv });
        let h5 = Element::new("h5");
        let h2 = Element::new("h2");
        assert_eq!(resolve_depth(5, &h5, Some(&f)), 3);
        assert_eq!(resolve_depth(2, &h2, Some(&f)), 2);
    }

    #[test]
    fn test_override_clamped_silently() {
        let low: DepthOverrideFn = Box::new(|_, _| 0);
        let high: DepthOverrideFn = Box::new(|_, _| 200);
        let h3 = Element::new("h3");
        assert_eq!(resolve_depth(3, &h3, Some(&low)), 1);
        assert_eq!(resolve_depth(3, &h3, Some(&high)), 6);
    }

    #[test]
    fn test_override_sees_element() {
        let f: DepthOverrideFn = Box::new(|lv, elem| {
            if elem.has_attribute("data-column") {
                3
            } else {
                lv
            }
        });
        let mut column = Element::new("h5");
        column.set_attribute("data-column", "");
        assert_eq!(resolve_depth(5, &column, Some(&f)), 3);
        assert_eq!(resolve_depth(5, &Element::new("h5"), Some(&f)), 5);
    }
}
