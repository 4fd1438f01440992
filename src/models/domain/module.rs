use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Top level of the course hierarchy. Owns an ordered list of submodule ids.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub nombre: String,
    pub descripcion: String,
    pub imagen: String,
    #[serde(default)]
    pub submodulos: Vec<ObjectId>,
}

impl Module {
    pub fn new(nombre: String, descripcion: String, imagen: String) -> Self {
        Module {
            id: ObjectId::new(),
            nombre,
            descripcion,
            imagen,
            submodulos: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModulePatch {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

impl ModulePatch {
    pub fn apply(self, module: &mut Module) {
        if let Some(nombre) = self.nombre {
            module.nombre = nombre;
        }
        if let Some(descripcion) = self.descripcion {
            module.descripcion = descripcion;
        }
        if let Some(imagen) = self.imagen {
            module.imagen = imagen;
        }
    }
}
