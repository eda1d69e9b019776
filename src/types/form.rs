use std::fmt;

use serde::{Serialize, Serializer};

/// Fields of the add-user form, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Username,
    Email,
    Phone,
    Website,
    Street,
    Suite,
    City,
    Zipcode,
    CompanyName,
    CatchPhrase,
    Bs,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::Name,
        FormField::Username,
        FormField::Email,
        FormField::Phone,
        FormField::Website,
        FormField::Street,
        FormField::Suite,
        FormField::City,
        FormField::Zipcode,
        FormField::CompanyName,
        FormField::CatchPhrase,
        FormField::Bs,
    ];

    /// Key used for this field in error maps and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Website => "website",
            FormField::Street => "street",
            FormField::Suite => "suite",
            FormField::City => "city",
            FormField::Zipcode => "zipcode",
            FormField::CompanyName => "companyName",
            FormField::CatchPhrase => "catchPhrase",
            FormField::Bs => "bs",
        }
    }

    /// Human label shown in prompts.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Username => "Username",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Website => "Website",
            FormField::Street => "Street",
            FormField::Suite => "Suite",
            FormField::City => "City",
            FormField::Zipcode => "Zipcode",
            FormField::CompanyName => "Company name",
            FormField::CatchPhrase => "Catch phrase",
            FormField::Bs => "Business",
        }
    }

    /// Whether the form can be submitted with this field left blank.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            FormField::Website | FormField::Suite | FormField::CatchPhrase | FormField::Bs
        )
    }
}

impl Serialize for FormField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw values of the add-user form. Every field starts out empty.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub company_name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl FormRecord {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Website => &self.website,
            FormField::Street => &self.street,
            FormField::Suite => &self.suite,
            FormField::City => &self.city,
            FormField::Zipcode => &self.zipcode,
            FormField::CompanyName => &self.company_name,
            FormField::CatchPhrase => &self.catch_phrase,
            FormField::Bs => &self.bs,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Website => &mut self.website,
            FormField::Street => &mut self.street,
            FormField::Suite => &mut self.suite,
            FormField::City => &mut self.city,
            FormField::Zipcode => &mut self.zipcode,
            FormField::CompanyName => &mut self.company_name,
            FormField::CatchPhrase => &mut self.catch_phrase,
            FormField::Bs => &mut self.bs,
        };
        *slot = value.into();
    }
}
