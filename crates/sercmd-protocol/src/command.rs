//! Command, parameter and option data model.
//!
//! A [`Command`] is registered with the decoder once at setup time and keeps
//! its shape from then on. The only parts that change afterwards are the
//! per-decode transient fields: [`CmdOption::detected`] and
//! [`CmdOption::value`] are rewritten every time a frame carrying the command
//! is decoded, and [`Parameter::value`] is rewritten by the application
//! before encoding an outgoing frame.

use std::fmt;

/// Callback invoked with the positional parameter values of a decoded frame.
pub type Callback = Box<dyn FnMut(&[String])>;

/// A required, order-significant argument of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    /// Informational name, shown in help output only.
    pub name: String,
    /// Set by the decoder after a successful parse, or by the application
    /// before encoding.
    pub value: String,
    /// Human-readable description.
    pub description: String,
}

impl Parameter {
    /// Create a parameter with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            value: String::new(),
            description: description.into(),
        }
    }
}

/// A named, optional argument (a flag, with or without a value).
///
/// The stored `name` does not include the `-` marker; the marker is added on
/// encode and stripped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdOption {
    /// Flag spelling to match, without the marker prefix.
    pub name: String,
    /// Whether a value token follows the flag on the wire.
    pub has_value: bool,
    /// Value found after the flag (receiving) or to append after it
    /// (transmitting). Only meaningful when `has_value` is set.
    pub value: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the encoder includes this option in outgoing frames.
    pub to_send: bool,
    /// True if the most recent decode of the owning command carried this
    /// flag. Reset before every decode attempt, so it is only meaningful
    /// right after a successful decode.
    pub detected: bool,
}

impl CmdOption {
    /// Create an option. `to_send` defaults to true, `detected` to false.
    pub fn new(name: impl Into<String>, has_value: bool) -> Self {
        CmdOption {
            name: name.into(),
            has_value,
            value: String::new(),
            description: String::new(),
            to_send: true,
            detected: false,
        }
    }

    /// Create an option with a description.
    pub fn with_description(
        name: impl Into<String>,
        has_value: bool,
        description: impl Into<String>,
    ) -> Self {
        let mut option = CmdOption::new(name, has_value);
        option.description = description.into();
        option
    }
}

/// A named command: the unit the decoder matches incoming frames against and
/// the encoder builds outgoing frames from.
///
/// Owns its parameters (ordered, all required) and options (unordered,
/// matched by name). The callback, when present, runs synchronously inside
/// the decoder's `run()` once a frame for this command has been fully
/// validated.
pub struct Command {
    /// The first whitespace-delimited token of a frame body; the key the
    /// decoder matches against. Case-sensitive.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Registered positional parameters, in wire order.
    pub params: Vec<Parameter>,
    /// Registered options.
    pub options: Vec<CmdOption>,
    callback: Option<Callback>,
}

impl Command {
    /// Create a command with no callback.
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            description: String::new(),
            params: Vec::new(),
            options: Vec::new(),
            callback: None,
        }
    }

    /// Create a command with a callback.
    pub fn with_callback(name: impl Into<String>, callback: Callback) -> Self {
        let mut command = Command::new(name);
        command.callback = Some(callback);
        command
    }

    /// Replace the callback.
    pub fn set_callback(&mut self, callback: Callback) {
        self.callback = Some(callback);
    }

    /// Append a required positional parameter. Registration order is wire
    /// order.
    pub fn register_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    /// Append an option.
    pub fn register_option(&mut self, option: CmdOption) {
        self.options.push(option);
    }

    /// Look up an option by its flag spelling (without the marker).
    pub fn option(&self, name: &str) -> Option<&CmdOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Mutable option lookup, for flipping `to_send` or presetting values.
    pub fn option_mut(&mut self, name: &str) -> Option<&mut CmdOption> {
        self.options.iter_mut().find(|o| o.name == name)
    }

    /// Clear `detected` on every option. The decoder calls this before
    /// re-parsing a frame so stale detections from an earlier frame cannot
    /// leak through.
    pub(crate) fn reset_options(&mut self) {
        for option in &mut self.options {
            option.detected = false;
        }
    }

    /// Invoke the callback with the decoded parameter values. No-op when no
    /// callback is registered.
    pub(crate) fn run_callback(&mut self, params: &[String]) {
        if let Some(callback) = &mut self.callback {
            callback(params);
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("params", &self.params)
            .field("options", &self.options)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
