use std::collections::HashMap;

/// Substitutes `{name}` placeholders in a static template.
pub struct MessageBuilder {
    template: &'static str,
    vars: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: HashMap::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(key, value.into());
        self
    }

    pub fn build(self) -> String {
        let mut result = self.template.to_string();
        for (key, value) in self.vars {
            result = result.replace(&format!("{{{key}}}"), &value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_variables() {
        let text = MessageBuilder::new("{name} -> {path}")
            .var("name", "ComfyUI-Manager")
            .var("path", "ComfyUI/custom_nodes")
            .build();
        assert_eq!(text, "ComfyUI-Manager -> ComfyUI/custom_nodes");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let text = MessageBuilder::new("Waiting {seconds}s for {what}")
            .var("seconds", "10")
            .build();
        assert_eq!(text, "Waiting 10s for {what}");
    }

    #[test]
    fn test_msg_macro() {
        let text = crate::msg!("Python {version} OK", version = "3.11.4");
        assert_eq!(text, "Python 3.11.4 OK");
        assert_eq!(crate::msg!("plain"), "plain");
    }
}
