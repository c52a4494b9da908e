mod mock_collection;

pub use mock_collection::MockCollection;
