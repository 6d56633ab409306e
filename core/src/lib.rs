#[cfg(feature = "nom_ext")]
pub mod nom_ext;
