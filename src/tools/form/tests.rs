#[cfg(test)]
mod tests {
    use crate::tools::form::extract_form_state;

    #[test]
    fn collects_all_hidden_inputs() {
        let html = r#"
            <html><body>
                <form action="/servlet/Controller" method="post">
                    <input type="hidden" name="ViewState" value="dDwtMTQ4OTIx">
                    <input type="hidden" name="sessionToken" value="a1b2c3">
                    <input type="hidden" name="pagina" value="1">
                    <input type="text" name="textoPesquisa" value="">
                </form>
            </body></html>
        "#;

        let state = extract_form_state(html);
        assert_eq!(state.len(), 3);
        assert_eq!(state.get("ViewState").map(String::as_str), Some("dDwtMTQ4OTIx"));
        assert_eq!(state.get("sessionToken").map(String::as_str), Some("a1b2c3"));
        assert_eq!(state.get("pagina").map(String::as_str), Some("1"));
    }

    #[test]
    fn skips_inputs_missing_name_or_value() {
        let html = r#"
            <form>
                <input type="hidden" value="no-name">
                <input type="hidden" name="no-value">
                <input type="hidden" name="" value="empty-name">
                <input type="hidden" name="empty-value" value="">
                <input type="hidden" name="kept" value="yes">
            </form>
        "#;

        let state = extract_form_state(html);
        assert_eq!(state.len(), 1);
        assert_eq!(state.get("kept").map(String::as_str), Some("yes"));
    }

    #[test]
    fn ignores_visible_inputs() {
        let html = r#"
            <form>
                <input type="text" name="textoPesquisa" value="typed">
                <input type="submit" name="searchBasico" value="Pesquisar">
            </form>
        "#;

        assert!(extract_form_state(html).is_empty());
    }

    #[test]
    fn absent_form_yields_empty_map() {
        assert!(extract_form_state("<html><body><p>No form here</p></body></html>").is_empty());
        assert!(extract_form_state("").is_empty());
    }

    #[test]
    fn tolerates_malformed_markup() {
        let html = r#"<form><input type="hidden" name="tok" value="v1"<input type="hidden""#;
        let state = extract_form_state(html);
        // The parser recovers what it can; whatever survives must be well formed.
        for (name, value) in &state {
            assert!(!name.is_empty());
            assert!(!value.is_empty());
        }
    }
}
