use super::model::{FieldCatalog, FieldGroup};

fn group(entries: &[(&str, &str)]) -> FieldGroup {
    entries
        .iter()
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect()
}

impl FieldCatalog {
    /// Catalog written on first install.
    pub fn install_defaults() -> Self {
        Self {
            texto: group(&[("nombre", "nom"), ("apellido", "ape")]),
            numeros: group(&[("dni", "1"), ("nroAfiliado", "2")]),
            fechas: group(&[
                ("fechaNacimiento", "2025-09-01"),
                ("fechaConsulta", "2025-09-02"),
            ]),
            booleanos: group(&[("terminos", "true")]),
            select: group(&[
                ("sexo", "M"),
                ("obraSocial", "OSDE"),
                ("prioridad", "alta"),
                ("tipoAutorizacion", "Consulta"),
            ]),
            texto_largo: group(&[
                ("observaciones", "obsPrueba"),
                ("email", "email@prueba.com"),
                ("telefono", "3"),
            ]),
        }
    }
}
