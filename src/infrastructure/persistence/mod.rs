mod mock_record_store;
mod pg_record_store;
mod record_store_factory;
mod record_table;
mod supabase_record_store;

pub use mock_record_store::MockRecordStore;
pub use pg_record_store::PgRecordStore;
pub use record_store_factory::RecordStoreFactory;
pub use record_table::{
    DEFAULT_CONTENT_COLUMN, DEFAULT_TABLE, DEFAULT_UPDATED_AT_COLUMN, RecordTable,
};
pub use supabase_record_store::SupabaseRecordStore;
