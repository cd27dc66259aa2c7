/// The four inputs owned by the contact form. Required fields carry an
/// asterisk in their accessible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::LastName => "last-name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_input_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.input_id() == id)
    }
}
