//! Typed models for the Microsoft Graph beta device-management surface.
//!
//! `graph-beta-models` decodes and encodes the JSON payloads of a slice of the
//! Graph beta API: device configuration profiles, Windows kiosk settings,
//! Android device owner policies, Zebra firmware deployments, shell scripts
//! and group policy migration reports.
//!
//! # Features
//!
//! - Closed string enumerations with ordinal access and strict parsing
//! - Records with optional fields and a bag for undeclared wire fields, so
//!   a decode/encode round trip is lossless
//! - Polymorphic types dispatched on `@odata.type`, falling back to the base
//!   type for unknown or missing discriminators
//! - Concrete subtypes stamp their own discriminator when constructed
//!
//! # Usage
//!
//! ```no_run
//! use graph_beta_models::models::WindowsKioskAppKind;
//! use graph_beta_models::serialization::{from_json_str, to_json_string};
//!
//! let app: WindowsKioskAppKind = from_json_str(
//!     r##"{"@odata.type": "#microsoft.graph.windowsKioskWin32App", "name": "Notepad"}"##,
//! )?;
//! if let WindowsKioskAppKind::Win32(win32) = &app {
//!     eprintln!("classic app {:?}", win32.base().name());
//! }
//! eprintln!("{}", to_json_string(&app)?);
//! # Ok::<(), graph_beta_models::error::Error>(())
//! ```

pub mod catalog;
pub mod enum_codec;
pub mod error;
pub mod models;
pub mod serialization;
