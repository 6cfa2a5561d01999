pub mod db_error;
pub mod domain;
