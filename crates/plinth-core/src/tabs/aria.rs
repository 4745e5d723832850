//! Accessibility identifiers shared by tabs and panels

/// DOM id of the tab for `value`
pub fn tab_id(value: &str) -> String {
    format!("tab-{}", value)
}

/// DOM id of the panel for `value`
pub fn panel_id(value: &str) -> String {
    format!("panel-{}", value)
}

/// `tabindex` for a tab: only the active tab is in the tab order
pub fn tab_index(active: bool) -> &'static str {
    if active {
        "0"
    } else {
        "-1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids() {
        assert_eq!(tab_id("tab1"), "tab-tab1");
        assert_eq!(panel_id("tab1"), "panel-tab1");
    }

    #[test]
    fn tabindex() {
        assert_eq!(tab_index(true), "0");
        assert_eq!(tab_index(false), "-1");
    }
}
