//! Gestión de rutas e imágenes
//!
//! `PathManager` resuelve los directorios de la aplicación a partir de un
//! directorio base fijado al arrancar. `AssetManager` copia imágenes al
//! directorio de imágenes con un nombre que nunca pisa un archivo existente.
//!
//! La comprobación "nombre libre" y la copia no son atómicas: con varios
//! procesos escribiendo a la vez podría haber colisiones. En un solo
//! proceso no ocurre.

use crate::utils::errors::{AppError, AppResult};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directorios administrados por la aplicación
#[derive(Debug, Clone)]
pub struct PathManager {
    images_dir: PathBuf,
    output_dir: PathBuf,
    database_dir: PathBuf,
}

impl PathManager {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            images_dir: base_dir.join("images"),
            output_dir: base_dir.join("output"),
            database_dir: base_dir.join("database"),
        }
    }

    /// Crea los directorios si no existen (idempotente)
    pub fn ensure_directories(&self) -> io::Result<()> {
        fs::create_dir_all(&self.images_dir)?;
        fs::create_dir_all(&self.output_dir)?;
        fs::create_dir_all(&self.database_dir)?;
        Ok(())
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn database_dir(&self) -> &Path {
        &self.database_dir
    }

    /// Ruta completa para una imagen
    pub fn image_path(&self, filename: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.images_dir)?;
        Ok(self.images_dir.join(filename))
    }

    /// Ruta completa para un documento generado
    pub fn output_path(&self, filename: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(self.output_dir.join(filename))
    }
}

/// Copia imágenes al directorio de imágenes sin sobrescribir nunca
#[derive(Debug, Clone)]
pub struct AssetManager {
    paths: PathManager,
}

impl AssetManager {
    pub fn new(paths: PathManager) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &PathManager {
        &self.paths
    }

    /// Guarda una copia de `source` y devuelve el nombre almacenado.
    ///
    /// Devuelve `None` si no hay ruta, si el archivo no existe o si la copia
    /// falla; quien llama lo interpreta como "sin imagen".
    pub fn store_image(&self, source: Option<&Path>) -> Option<String> {
        let source = source.filter(|path| !path.as_os_str().is_empty())?;

        if !source.exists() {
            debug!("Imagen de origen inexistente: {}", source.display());
            return None;
        }

        match self.copy_into_store(source) {
            Ok(stored) => {
                info!("Imagen guardada como {}", stored);
                Some(stored)
            }
            Err(e) => {
                warn!("Error al guardar imagen {}: {}", source.display(), e);
                None
            }
        }
    }

    /// Ruta de un archivo almacenado, solo si existe
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let path = self.paths.images_dir().join(filename);
        path.is_file().then_some(path)
    }

    fn copy_into_store(&self, source: &Path) -> AppResult<String> {
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::Asset(format!("Nombre de archivo inválido: {}", source.display())))?;
        let stem = source
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name);
        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        let mut candidate = file_name.to_string();
        let mut destination = self
            .paths
            .image_path(&candidate)
            .map_err(|e| AppError::Asset(e.to_string()))?;

        let mut counter = 1;
        while destination.exists() {
            candidate = format!("{}_{}{}", stem, counter, extension);
            destination = self.paths.images_dir().join(&candidate);
            counter += 1;
        }

        fs::copy(source, &destination).map_err(|e| AppError::Asset(e.to_string()))?;
        preserve_modified_time(source, &destination);

        Ok(candidate)
    }
}

fn preserve_modified_time(source: &Path, destination: &Path) {
    let result = fs::metadata(source)
        .and_then(|metadata| metadata.modified())
        .and_then(|modified| {
            File::options()
                .write(true)
                .open(destination)?
                .set_modified(modified)
        });

    if let Err(e) = result {
        debug!("No se pudo conservar la fecha de {}: {}", destination.display(), e);
    }
}
