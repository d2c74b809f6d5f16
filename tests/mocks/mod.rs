mod mock_snapshot_repository;

pub use mock_snapshot_repository::MockSnapshotRepository;
