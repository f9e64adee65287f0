mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DocExtractionSettings, ExtractionSettings, FetchSettings, LoggingSettings,
    PdfExtractionSettings, RecordStoreProvider, RecordStoreSettings, ServerSettings, Settings,
    SettingsError,
};
