use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Submodule {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub nombre: String,
    pub descripcion: String,
    #[serde(default)]
    pub videos: Vec<ObjectId>,
}

impl Submodule {
    pub fn new(nombre: String, descripcion: String) -> Self {
        Submodule {
            id: ObjectId::new(),
            nombre,
            descripcion,
            videos: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmodulePatch {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

impl SubmodulePatch {
    pub fn apply(self, submodule: &mut Submodule) {
        if let Some(nombre) = self.nombre {
            submodule.nombre = nombre;
        }
        if let Some(descripcion) = self.descripcion {
            submodule.descripcion = descripcion;
        }
    }
}
