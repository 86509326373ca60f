use serde::{Deserialize, Serialize};

/// Named invocation argument of a view reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewArgument {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Named pointer to a renderable view plus its invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewReference {
    pub name: String,

    /// Arguments in configuration order
    #[serde(default)]
    pub arguments: Vec<ViewArgument>,
}

impl ViewReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(ViewArgument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first argument with the given name
    pub fn argument_value(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.value.as_str())
    }
}
