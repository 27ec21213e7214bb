//! Repositorios
//!
//! Capa CRUD y de búsqueda, un repositorio por tabla. No revalidan el
//! contenido de los campos: eso ocurre antes, en los controladores.

pub mod customer_repository;
pub mod sale_repository;
pub mod vehicle_repository;

pub use customer_repository::CustomerRepository;
pub use sale_repository::SaleRepository;
pub use vehicle_repository::VehicleRepository;

/// Coincidencia de subcadena literal sin distinguir mayúsculas (Unicode).
///
/// `needle` debe llegar ya en minúsculas; un término vacío coincide con todo.
pub(crate) fn matches_term(fields: &[Option<&str>], needle: &str) -> bool {
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_term_folds_accented_text() {
        let needle = "JOSÉ NÚÑEZ".to_lowercase();
        assert!(matches_term(&[Some("José Núñez"), None], &needle));
        assert!(matches_term(&[None, Some("Azul Océano")], "océano"));
        assert!(!matches_term(&[Some("Azul Oceano")], "océano"));
        assert!(matches_term(&[Some("50%_off")], "%_"));
        assert!(!matches_term(&[Some("Toyota")], "%"));
        assert!(matches_term(&[Some("Toyota")], ""));
        assert!(!matches_term(&[None], ""));
    }
}
