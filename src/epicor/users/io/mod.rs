pub mod csv_read;
