//! Serde bridge.
//!
//! [`ValueSerializer`] turns any `T: Serialize` into a [`Value`], and
//! [`ArgumentsSerializer`] turns a map, struct, or sequence into
//! [`Arguments`], keyed by map key, field name, or element index.
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use message_formatter::{format_serialized, to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order {
//!     customer: String,
//!     items: Vec<String>,
//!     total: f64,
//! }
//!
//! let order = Order {
//!     customer: "Alice".to_string(),
//!     items: vec!["tea".to_string(), "scones".to_string()],
//!     total: 12.5,
//! };
//!
//! let message = format_serialized("{customer} ordered {items:and} for {total.2}", &order).unwrap();
//! assert_eq!(message, "Alice ordered tea and scones for 12.50");
//!
//! // Structs and maps keep their values only.
//! assert_eq!(to_value(&order).unwrap().as_list().map(Vec::len), Some(3));
//! ```

use crate::{to_value, Arguments, Error, Key, Result, Value};
use serde::{ser, Serialize};

/// Serializes any value into a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

/// Collects the values of a map or struct; keys are discarded.
pub struct SerializeValues {
    vec: Vec<Value>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeValues;
    type SerializeStruct = SerializeValues;
    type SerializeStructVariant = SerializeValues;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Integer(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(v.iter().map(|&b| Value::Integer(b as i64)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeValues> {
        Ok(SerializeValues::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeValues> {
        Ok(SerializeValues::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        len: usize,
    ) -> Result<SerializeValues> {
        Ok(SerializeValues::new(len))
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeValues {
    fn new(capacity: usize) -> Self {
        SerializeValues {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeMap for SerializeValues {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, _key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeStruct for SerializeValues {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeStructVariant for SerializeValues {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

/// Serializes a map, struct, or sequence into [`Arguments`].
///
/// Anything else fails with [`Error::UnsupportedArguments`], except unit and
/// `None`, which produce an empty argument set.
pub struct ArgumentsSerializer;

/// Collects keyed arguments from a map, struct, or sequence.
pub struct SerializeArguments {
    arguments: Arguments,
    current_key: Option<Key>,
}

impl SerializeArguments {
    fn new(capacity: usize) -> Self {
        SerializeArguments {
            arguments: Arguments::with_capacity(capacity),
            current_key: None,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let index = self.arguments.len();
        self.arguments.insert(index, to_value(value)?);
        Ok(())
    }
}

impl ser::Serializer for ArgumentsSerializer {
    type Ok = Arguments;
    type Error = Error;

    type SerializeSeq = SerializeArguments;
    type SerializeTuple = SerializeArguments;
    type SerializeTupleStruct = SerializeArguments;
    type SerializeTupleVariant = ser::Impossible<Arguments, Error>;
    type SerializeMap = SerializeArguments;
    type SerializeStruct = SerializeArguments;
    type SerializeStructVariant = ser::Impossible<Arguments, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Arguments> {
        Err(Error::unsupported_arguments("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Arguments> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Arguments> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Arguments> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, _v: i64) -> Result<Arguments> {
        Err(Error::unsupported_arguments("integer"))
    }

    fn serialize_u8(self, v: u8) -> Result<Arguments> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Arguments> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Arguments> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, _v: u64) -> Result<Arguments> {
        Err(Error::unsupported_arguments("integer"))
    }

    fn serialize_f32(self, v: f32) -> Result<Arguments> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, _v: f64) -> Result<Arguments> {
        Err(Error::unsupported_arguments("float"))
    }

    fn serialize_char(self, _v: char) -> Result<Arguments> {
        Err(Error::unsupported_arguments("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<Arguments> {
        Err(Error::unsupported_arguments("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Arguments> {
        Err(Error::unsupported_arguments("bytes"))
    }

    fn serialize_none(self) -> Result<Arguments> {
        Ok(Arguments::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Arguments>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Arguments> {
        Ok(Arguments::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Arguments> {
        Ok(Arguments::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Arguments> {
        Err(Error::unsupported_arguments("unit variant"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Arguments>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<Arguments>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArguments> {
        Ok(SerializeArguments::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArguments> {
        Ok(SerializeArguments::new(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeArguments> {
        Ok(SerializeArguments::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_arguments("tuple variant"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeArguments> {
        Ok(SerializeArguments::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeArguments> {
        Ok(SerializeArguments::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_arguments("struct variant"))
    }
}

impl ser::SerializeSeq for SerializeArguments {
    type Ok = Arguments;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Arguments> {
        Ok(self.arguments)
    }
}

impl ser::SerializeTuple for SerializeArguments {
    type Ok = Arguments;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Arguments> {
        Ok(self.arguments)
    }
}

impl ser::SerializeTupleStruct for SerializeArguments {
    type Ok = Arguments;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Arguments> {
        Ok(self.arguments)
    }
}

impl ser::SerializeMap for SerializeArguments {
    type Ok = Arguments;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => Key::from(s),
            Value::Integer(i) => match usize::try_from(i) {
                Ok(index) => Key::Index(index),
                Err(_) => Key::Name(i.to_string()),
            },
            other => {
                return Err(Error::custom(format!(
                    "argument keys must be strings or integers, found {}",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.arguments.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Arguments> {
        Ok(self.arguments)
    }
}

impl ser::SerializeStruct for SerializeArguments {
    type Ok = Arguments;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.arguments.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Arguments> {
        Ok(self.arguments)
    }
}
