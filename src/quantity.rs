pub mod lamports;
pub mod percent;
