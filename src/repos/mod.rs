pub mod diacritic_repo;
pub mod reference_tables;
pub mod stopword_repo;
