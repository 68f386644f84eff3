//! Field domain model and parameters.

use crate::{
    model::field::{CreateFieldDto, FieldDto, UpdateFieldDto},
    server::util::id::id_or_generate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub location: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    /// Rental cost of one match slot; the FIELD_RENT expense of a settled match.
    pub hourly_rate: f64,
    pub coordinates: Option<serde_json::Value>,
}

impl Field {
    pub fn from_entity(entity: entity::field::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            name: entity.name,
            location: entity.location,
            contact_name: entity.contact_name,
            contact_phone: entity.contact_phone,
            hourly_rate: entity.hourly_rate,
            coordinates: entity.coordinates,
        }
    }

    pub fn into_dto(self) -> FieldDto {
        FieldDto {
            id: self.id,
            group_id: self.group_id,
            name: self.name,
            location: self.location,
            contact_name: self.contact_name,
            contact_phone: self.contact_phone,
            hourly_rate: self.hourly_rate,
            coordinates: self.coordinates,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFieldParams {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub location: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub hourly_rate: f64,
    pub coordinates: Option<serde_json::Value>,
}

impl CreateFieldParams {
    pub fn from_dto(dto: CreateFieldDto) -> Self {
        Self {
            id: id_or_generate(dto.id),
            group_id: dto.group_id,
            name: dto.name,
            location: dto.location,
            contact_name: dto.contact_name,
            contact_phone: dto.contact_phone,
            hourly_rate: dto.hourly_rate,
            coordinates: dto.coordinates,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn into_field(self) -> Field {
        Field {
            id: self.id,
            group_id: self.group_id,
            name: self.name,
            location: self.location,
            contact_name: self.contact_name,
            contact_phone: self.contact_phone,
            hourly_rate: self.hourly_rate,
            coordinates: self.coordinates,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFieldParams {
    pub group_id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub contact_name: Option<Option<String>>,
    pub contact_phone: Option<Option<String>>,
    pub hourly_rate: Option<f64>,
    pub coordinates: Option<Option<serde_json::Value>>,
}

impl UpdateFieldParams {
    pub fn from_dto(dto: UpdateFieldDto) -> Self {
        Self {
            group_id: dto.group_id,
            name: dto.name,
            location: dto.location,
            contact_name: dto.contact_name,
            contact_phone: dto.contact_phone,
            hourly_rate: dto.hourly_rate,
            coordinates: dto.coordinates,
        }
    }

    pub fn apply_to(self, field: &mut Field) {
        if let Some(group_id) = self.group_id {
            field.group_id = group_id;
        }
        if let Some(name) = self.name {
            field.name = name;
        }
        if let Some(location) = self.location {
            field.location = location;
        }
        if let Some(contact_name) = self.contact_name {
            field.contact_name = contact_name;
        }
        if let Some(contact_phone) = self.contact_phone {
            field.contact_phone = contact_phone;
        }
        if let Some(hourly_rate) = self.hourly_rate {
            field.hourly_rate = hourly_rate;
        }
        if let Some(coordinates) = self.coordinates {
            field.coordinates = coordinates;
        }
    }
}
