use serde::{de, ser::SerializeStruct, Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

use crate::traits::Scalar;
use crate::{Point, Triangulation};

impl<T> Serialize for Point<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Point", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl<'de, T> Deserialize<'de> for Point<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["x", "y"];

        enum Field {
            X,
            Y,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct FieldVisitor;

                impl<'de> de::Visitor<'de> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("x or y")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: de::Error,
                    {
                        match value {
                            "x" => Ok(Field::X),
                            "y" => Ok(Field::Y),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct PointVisitor<T> {
            phantom: PhantomData<T>,
        }

        impl<'de, T> de::Visitor<'de> for PointVisitor<T>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Point<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a point with fields x and y")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Point<T>, V::Error>
            where
                V: de::SeqAccess<'de>,
            {
                let x = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let y = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                Ok(Point { x, y })
            }

            fn visit_map<V>(self, mut map: V) -> Result<Point<T>, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut x = None;
                let mut y = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::X => {
                            if x.is_some() {
                                return Err(de::Error::duplicate_field("x"));
                            }
                            x = Some(map.next_value()?);
                        }
                        Field::Y => {
                            if y.is_some() {
                                return Err(de::Error::duplicate_field("y"));
                            }
                            y = Some(map.next_value()?);
                        }
                    }
                }

                let x = x.ok_or_else(|| de::Error::missing_field("x"))?;
                let y = y.ok_or_else(|| de::Error::missing_field("y"))?;

                Ok(Point { x, y })
            }
        }

        deserializer.deserialize_struct(
            "Point",
            FIELDS,
            PointVisitor {
                phantom: PhantomData,
            },
        )
    }
}

impl<T> Serialize for Triangulation<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Triangulation", 3)?;
        state.serialize_field("points", &self.points)?;
        state.serialize_field("faces", &self.faces)?;
        state.serialize_field("num_faces", &self.num_faces)?;
        state.end()
    }
}

impl<'de, T> Deserialize<'de> for Triangulation<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["points", "faces", "num_faces"];

        enum Field {
            Points,
            Faces,
            NumFaces,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct FieldVisitor;

                impl<'de> de::Visitor<'de> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("points, faces, or num_faces")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: de::Error,
                    {
                        match value {
                            "points" => Ok(Field::Points),
                            "faces" => Ok(Field::Faces),
                            "num_faces" => Ok(Field::NumFaces),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct TriangulationVisitor<T> {
            phantom: PhantomData<T>,
        }

        impl<'de, T> de::Visitor<'de> for TriangulationVisitor<T>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Triangulation<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a triangulation with points, faces, and num_faces")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Triangulation<T>, V::Error>
            where
                V: de::SeqAccess<'de>,
            {
                let points = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let faces = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let num_faces = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;

                Ok(Triangulation {
                    points,
                    faces,
                    num_faces,
                })
            }

            fn visit_map<V>(self, mut map: V) -> Result<Triangulation<T>, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut points = None;
                let mut faces = None;
                let mut num_faces = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Points => {
                            if points.is_some() {
                                return Err(de::Error::duplicate_field("points"));
                            }
                            points = Some(map.next_value()?);
                        }
                        Field::Faces => {
                            if faces.is_some() {
                                return Err(de::Error::duplicate_field("faces"));
                            }
                            faces = Some(map.next_value()?);
                        }
                        Field::NumFaces => {
                            if num_faces.is_some() {
                                return Err(de::Error::duplicate_field("num_faces"));
                            }
                            num_faces = Some(map.next_value()?);
                        }
                    }
                }

                let points = points.ok_or_else(|| de::Error::missing_field("points"))?;
                let faces = faces.ok_or_else(|| de::Error::missing_field("faces"))?;
                let num_faces = num_faces.ok_or_else(|| de::Error::missing_field("num_faces"))?;

                Ok(Triangulation {
                    points,
                    faces,
                    num_faces,
                })
            }
        }

        deserializer.deserialize_struct(
            "Triangulation",
            FIELDS,
            TriangulationVisitor {
                phantom: PhantomData,
            },
        )
    }
}
