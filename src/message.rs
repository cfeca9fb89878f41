use crate::field::Field;
use prost::bytes::Bytes;
use std::{iter::FusedIterator, slice};

/// A decoded message: its fields in the order they were encountered.
///
/// Field numbers may repeat. Lookups by number are views over the sequence;
/// there is no index that could reorder repeated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    fields: Vec<Field>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The first field with the given number, i.e. the value of a singular field.
    pub fn first(&self, number: u32) -> Option<&Field> {
        self.fields.iter().find(|field| field.number == number)
    }

    /// All fields with the given number, in encounter order.
    pub fn repeated(&self, number: u32) -> Repeated<'_> {
        Repeated {
            fields: self.fields.iter(),
            number,
        }
    }

    pub fn get_varint(&self, number: u32) -> Option<u64> {
        self.first(number)?.as_varint()
    }

    pub fn get_fixed32(&self, number: u32) -> Option<u32> {
        self.first(number)?.as_fixed32()
    }

    pub fn get_fixed64(&self, number: u32) -> Option<u64> {
        self.first(number)?.as_fixed64()
    }

    pub fn get_bytes(&self, number: u32) -> Option<&Bytes> {
        self.first(number)?.as_bytes()
    }

    pub fn get_message(&self, number: u32) -> Option<&Message> {
        self.first(number)?.as_message()
    }

    /// Follows `path` through nested messages, taking the first match at every
    /// level, and returns the field the last number names.
    ///
    /// `msg.path(&[1, 2, 3])` is `msg.get_message(1)?.get_message(2)?.first(3)`.
    pub fn path(&self, path: &[u32]) -> Option<&Field> {
        let (last, parents) = path.split_last()?;
        self.message_at(parents)?.first(*last)
    }

    /// The nested message at `path`. An empty path yields `self`.
    pub fn message_at(&self, path: &[u32]) -> Option<&Message> {
        path.iter()
            .try_fold(self, |message, number| message.get_message(*number))
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.push(field);
        self
    }

    pub fn with_varint(self, number: u32, value: u64) -> Self {
        self.with_field(Field::varint(number, value))
    }

    pub fn with_fixed32(self, number: u32, value: u32) -> Self {
        self.with_field(Field::fixed32(number, value))
    }

    pub fn with_fixed64(self, number: u32, value: u64) -> Self {
        self.with_field(Field::fixed64(number, value))
    }

    pub fn with_bytes(self, number: u32, raw: impl Into<Bytes>) -> Self {
        self.with_field(Field::bytes(number, raw))
    }

    pub fn with_string(self, number: u32, value: impl Into<String>) -> Self {
        self.with_field(Field::string(number, value))
    }

    pub fn with_message(self, number: u32, message: Message) -> Self {
        self.with_field(Field::message(number, message))
    }
}

impl From<Vec<Field>> for Message {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FromIterator<Field> for Message {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<Field> for Message {
    fn extend<T: IntoIterator<Item = Field>>(&mut self, iter: T) {
        self.fields.extend(iter)
    }
}

impl IntoIterator for Message {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Iterator over the fields of a [`Message`] sharing one field number.
#[derive(Debug, Clone)]
pub struct Repeated<'a> {
    fields: slice::Iter<'a, Field>,
    number: u32,
}

impl<'a> Iterator for Repeated<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<&'a Field> {
        let number = self.number;
        self.fields.find(|field| field.number == number)
    }
}

impl FusedIterator for Repeated<'_> {}
