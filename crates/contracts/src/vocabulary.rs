//! Fixed IPC vocabularies and validation rules
//!
//! The accepted message types, control commands and payload bound are
//! compile-time constants. Nothing here is configurable at runtime.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::IpcMessage;

/// Maximum accepted payload size in bytes (inclusive)
pub const MAX_IPC_SIZE: i64 = 256;

/// Simulated latency of one IPC round trip to the DSP
pub const IPC_TIMEOUT: Duration = Duration::from_micros(300);

/// Error returned when a token is not part of a vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} '{name}'")]
pub struct UnknownName {
    pub vocabulary: &'static str,
    pub name: String,
}

/// Define a closed vocabulary enum with its exact wire names
///
/// Generates `ALL`, `as_str`, `Display`, an exact-match `FromStr` and a
/// `Serialize` impl that uses the wire name.
macro_rules! define_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member of the vocabulary, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Exact wire identifier
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownName {
                        vocabulary: $label,
                        name: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

define_vocabulary!(
    /// IPC message type
    IpcType, "ipc type" {
        SetValue => "SOF_IPC_COMP_SET_VALUE",
        GetValue => "SOF_IPC_COMP_GET_VALUE",
        GetData => "SOF_IPC_COMP_GET_DATA",
        SetData => "SOF_IPC_COMP_SET_DATA",
        Notification => "SOF_IPC_COMP_NOTIFICATION",
    }
);

define_vocabulary!(
    /// Control command carried by an IPC message
    IpcCommand, "ipc command" {
        Volume => "SOF_CTRL_CMD_VOLUME",
        Enum => "SOF_CTRL_CMD_ENUM",
        Switch => "SOF_CTRL_CMD_SWITCH",
        Binary => "SOF_CTRL_CMD_BINARY",
    }
);

/// Check a type name against the type vocabulary
pub fn is_valid_type(name: &str) -> bool {
    name.parse::<IpcType>().is_ok()
}

/// Check a command name against the command vocabulary
pub fn is_valid_command(name: &str) -> bool {
    name.parse::<IpcCommand>().is_ok()
}

/// Check a payload size against `[0, MAX_IPC_SIZE]`
pub fn is_valid_size(size: i64) -> bool {
    (0..=MAX_IPC_SIZE).contains(&size)
}

/// Per-field validation outcome of one message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub type_ok: bool,
    pub command_ok: bool,
    pub size_ok: bool,
}

impl Validation {
    /// A message is valid only if all three fields pass
    pub fn is_valid(&self) -> bool {
        self.type_ok && self.command_ok && self.size_ok
    }

    /// Names of the fields that failed, for diagnostics
    pub fn failed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.type_ok {
            fields.push("ipc_type");
        }
        if !self.command_ok {
            fields.push("ipc_cmd");
        }
        if !self.size_ok {
            fields.push("ipc_size");
        }
        fields
    }
}

/// Classify a message
///
/// All three checks are always evaluated.
pub fn validate(msg: &IpcMessage) -> Validation {
    Validation {
        type_ok: is_valid_type(msg.ipc_type()),
        command_ok: is_valid_command(msg.ipc_cmd()),
        size_ok: is_valid_size(msg.ipc_size()),
    }
}
