mod json_serializer;

pub use json_serializer::JsonSerializer;
