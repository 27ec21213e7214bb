//! Utilidades de validación
//!
//! Funciones puras, una por clase de campo. Cada una devuelve el valor
//! interpretado o un `ValidationError` con un mensaje legible. Los
//! controladores las encadenan con `?`, de modo que el primer campo
//! inválido detiene la validación del registro.

use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

/// Año más antiguo aceptado para un vehículo
pub const MIN_VEHICLE_YEAR: i64 = 1900;

/// Longitud mínima de un teléfono
pub const MIN_PHONE_LENGTH: usize = 7;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9\s()-]+$").unwrap();
}

fn rejection(code: &'static str, field: &str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.add_param(Cow::from("field"), &field.to_string());
    error.message = Some(Cow::from(message));
    error
}

/// Trata un texto vacío o de solo espacios como ausente
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validar que un campo no esté vacío
pub fn validate_required(value: Option<&str>, field_name: &str) -> Result<(), ValidationError> {
    match non_blank(value) {
        Some(_) => Ok(()),
        None => Err(rejection(
            "required",
            field_name,
            format!("El campo {} es obligatorio", field_name),
        )),
    }
}

/// Validar que un valor sea numérico y, opcionalmente, que esté dentro de los límites
pub fn validate_number(
    value: &str,
    field_name: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<f64, ValidationError> {
    let number = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            rejection(
                "number",
                field_name,
                format!("{} debe ser un número válido", field_name),
            )
        })?;

    if let Some(min) = min {
        if number < min {
            return Err(rejection(
                "range",
                field_name,
                format!("{} debe ser mayor o igual a {}", field_name, min),
            ));
        }
    }

    if let Some(max) = max {
        if number > max {
            return Err(rejection(
                "range",
                field_name,
                format!("{} debe ser menor o igual a {}", field_name, max),
            ));
        }
    }

    Ok(number)
}

/// Validar el año de un vehículo contra el año en curso
pub fn validate_year(value: &str) -> Result<i64, ValidationError> {
    validate_year_for(value, i64::from(Local::now().year()))
}

/// Validar el año de un vehículo: entero en [1900, año_actual + 1]
pub fn validate_year_for(value: &str, current_year: i64) -> Result<i64, ValidationError> {
    let year = value.trim().parse::<i64>().map_err(|_| {
        rejection("year", "Año", "El año debe ser un número válido".to_string())
    })?;

    let max_year = current_year + 1;
    if year < MIN_VEHICLE_YEAR || year > max_year {
        return Err(rejection(
            "year",
            "Año",
            format!("El año debe estar entre {} y {}", MIN_VEHICLE_YEAR, max_year),
        ));
    }

    Ok(year)
}

/// Validar formato de correo electrónico (opcional)
pub fn validate_email(value: Option<&str>) -> Result<(), ValidationError> {
    match non_blank(value) {
        None => Ok(()),
        Some(email) if EMAIL_REGEX.is_match(email) => Ok(()),
        Some(_) => Err(rejection(
            "email",
            "Correo",
            "Formato de correo electrónico inválido".to_string(),
        )),
    }
}

/// Validar formato de teléfono (opcional): dígitos, espacios, guiones y paréntesis
pub fn validate_phone(value: Option<&str>) -> Result<(), ValidationError> {
    match non_blank(value) {
        None => Ok(()),
        Some(phone) if PHONE_REGEX.is_match(phone) && phone.chars().count() >= MIN_PHONE_LENGTH => {
            Ok(())
        }
        Some(_) => Err(rejection(
            "phone",
            "Teléfono",
            "Formato de teléfono inválido".to_string(),
        )),
    }
}

/// Validar que un identificador de referencia sea un entero positivo
pub fn validate_positive_id(
    value: i64,
    field_name: &str,
    message: &str,
) -> Result<i64, ValidationError> {
    if value <= 0 {
        return Err(rejection("positive", field_name, message.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(error: ValidationError) -> String {
        error.message.map(|m| m.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required(Some("Toyota"), "Marca").is_ok());
        assert!(validate_required(Some("   "), "Marca").is_err());
        assert!(validate_required(Some(""), "Marca").is_err());

        let error = validate_required(None, "Marca").unwrap_err();
        assert_eq!(message(error), "El campo Marca es obligatorio");
    }

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number("18000", "Precio", Some(0.0), None).unwrap(), 18000.0);
        assert_eq!(validate_number(" 12.5 ", "Precio", None, None).unwrap(), 12.5);
        assert!(validate_number("0", "Precio", Some(0.0), None).is_ok());
        assert!(validate_number("-1", "Precio", Some(0.0), None).is_err());
        assert!(validate_number("101", "Precio", None, Some(100.0)).is_err());
        assert!(validate_number("-500", "Precio", None, Some(100.0)).is_ok());
        assert!(validate_number("abc", "Precio", None, None).is_err());
        assert!(validate_number("NaN", "Precio", None, None).is_err());
        assert!(validate_number("inf", "Precio", None, None).is_err());
    }

    #[test]
    fn test_validate_year_bounds() {
        let current = 2026;
        assert!(validate_year_for("1899", current).is_err());
        assert_eq!(validate_year_for("1900", current).unwrap(), 1900);
        assert_eq!(validate_year_for("2027", current).unwrap(), 2027);
        assert!(validate_year_for("2028", current).is_err());
        assert!(validate_year_for("20x3", current).is_err());
        assert!(validate_year_for("2023.5", current).is_err());
    }

    #[test]
    fn test_validate_year_uses_current_year() {
        let current = i64::from(Local::now().year());
        assert!(validate_year(&(current + 1).to_string()).is_ok());
        assert!(validate_year(&(current + 2).to_string()).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email(None).is_ok());
        assert!(validate_email(Some("")).is_ok());
        assert!(validate_email(Some("ana.lopez@example.com")).is_ok());
        assert!(validate_email(Some("ANA@EXAMPLE.COM")).is_ok());
        assert!(validate_email(Some("invalid-email")).is_err());
        assert!(validate_email(Some("test@")).is_err());
        assert!(validate_email(Some("test@example.c")).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone(None).is_ok());
        assert!(validate_phone(Some("  ")).is_ok());
        assert!(validate_phone(Some("(55) 1234-5678")).is_ok());
        assert!(validate_phone(Some("5551234")).is_ok());
        assert!(validate_phone(Some("555123")).is_err());
        assert!(validate_phone(Some("555-CALL-NOW")).is_err());
    }

    #[test]
    fn test_validate_positive_id() {
        assert_eq!(validate_positive_id(3, "Auto", "Debe seleccionar un auto").unwrap(), 3);
        let error = validate_positive_id(0, "Auto", "Debe seleccionar un auto").unwrap_err();
        assert_eq!(message(error), "Debe seleccionar un auto");
        assert!(validate_positive_id(-4, "Auto", "Debe seleccionar un auto").is_err());
    }
}
