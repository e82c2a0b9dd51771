#[cfg(test)]
mod tests {
    use crate::config::RenderConfig;
    use crate::tools::render::browser::find_browser;
    use crate::tools::render::{input_selector, select_option_script};
    use std::path::PathBuf;

    #[test]
    fn input_selector_targets_named_field() {
        assert_eq!(
            input_selector("textoPesquisa"),
            "input[name=\"textoPesquisa\"]"
        );
    }

    #[test]
    fn select_script_sets_value_and_fires_change() {
        let script = select_option_script("tipoSearchBas", "1");
        assert!(script.contains("select[name=\"tipoSearchBas\"]"));
        assert!(script.contains("el.value = '1'"));
        assert!(script.contains("new Event('change'"));
    }

    #[test]
    fn select_script_is_a_null_safe_iife() {
        let script = select_option_script("tipoSearchBas", "1");
        assert!(script.starts_with("(() => {"));
        assert!(script.ends_with("})()"));
        assert!(script.contains("if (el)"));
    }

    #[test]
    fn configured_browser_path_must_exist() {
        // A nonexistent explicit path falls through to PATH probing rather
        // than being returned blindly.
        let config = RenderConfig {
            browser_path: Some(PathBuf::from("/nonexistent/definitely/not/chrome")),
            ..RenderConfig::default()
        };
        if let Some(found) = find_browser(&config) {
            assert_ne!(found, PathBuf::from("/nonexistent/definitely/not/chrome"));
        }
    }
}
