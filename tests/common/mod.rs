pub mod mock_deezer;
