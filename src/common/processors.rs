use serde_json::Value;

use crate::common::data::Error;

fn get_field<'a>(object: &'a Value, name: &'static str) -> Result<&'a Value, Error> {
    let value = object
        .get(name)
        .ok_or(format!("{name} not present in {object}"))?;
    Ok(value)
}

pub fn get_str_from_value<'a>(object: &'a Value, name: &'static str) -> Result<&'a str, Error> {
    let value = get_field(object, name)?;
    let str = value.as_str().ok_or(format!(
        "{name} is not a string {value}\nObject is {object}"
    ))?;
    Ok(str)
}

pub fn get_array_from_value<'a>(
    object: &'a Value,
    name: &'static str,
) -> Result<&'a Vec<Value>, Error> {
    let value = get_field(object, name)?;
    let arr = value.as_array().ok_or(format!(
        "{name} is not an array {value}\nObject is {object}"
    ))?;
    Ok(arr)
}

/// A color entry's name is either a plain string or `{"value": "..."}`.
pub fn get_name_from_value(object: &Value) -> Result<&str, Error> {
    let value = get_field(object, "name")?;
    match value {
        Value::String(name) => Ok(name.as_str()),
        Value::Object(_) => get_str_from_value(value, "value"),
        _ => Err(format!("name is neither a string nor an object {value}\nObject is {object}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_shapes() -> Result<(), Error> {
        let plain = json!({ "hex": "FFFFFF", "name": "White" });
        let nested = json!({ "hex": "000000", "name": { "value": "Black", "closest_named_hex": "#000000" } });

        assert_eq!(get_name_from_value(&plain)?, "White");
        assert_eq!(get_name_from_value(&nested)?, "Black");
        assert_eq!(get_str_from_value(&nested, "hex")?, "000000");
        Ok(())
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let entry = json!({ "hex": 123, "name": ["White"] });

        assert!(matches!(get_str_from_value(&entry, "hex"), Err(Error::ParseError(_))));
        assert!(matches!(get_name_from_value(&entry), Err(Error::ParseError(_))));
        assert!(matches!(get_array_from_value(&entry, "colors"), Err(Error::ParseError(_))));
    }
}
