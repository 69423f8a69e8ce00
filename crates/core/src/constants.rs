//! Constants used throughout the consultas core crate.
//!
//! This module contains the path and message constants shared by the entry points so that the
//! server, the desktop shell and the CLI agree on where the document lives.

/// Default location of the consultations document, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Default directory holding the frontend's static assets.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Landing page served at `/`.
pub const INDEX_HTML_FILENAME: &str = "index.html";

/// Consultation history page served at `/historial.html`.
pub const HISTORY_HTML_FILENAME: &str = "historial.html";

/// Not-found message returned by the server variant, which refreshes on startup.
pub const SERVER_NOT_FOUND_MESSAGE: &str =
    "El archivo de datos no fue encontrado. Contacte al administrador.";

/// Not-found message returned by the desktop variant, which never refreshes by itself.
pub const DESKTOP_NOT_FOUND_MESSAGE: &str =
    "El archivo de datos no fue encontrado. Ejecute `consultas refresh` para generarlo.";
