//! Infrastructure: connection management and DbErr translation.

pub mod db;
pub mod db_errors;
