//! Stateless bindings for the text tool pages

use texttool_core::{
    base64_decode, base64_encode, convert_case, hex_decode, hex_encode, json_minify, json_pretty,
    text_stats, url_decode, url_encode, Base64Alphabet, CaseStyle,
};
use wasm_bindgen::prelude::*;

fn alphabet(url_safe: bool) -> Base64Alphabet {
    if url_safe {
        Base64Alphabet::UrlSafe
    } else {
        Base64Alphabet::Standard
    }
}

#[wasm_bindgen(js_name = base64Encode)]
pub fn base64_encode_js(text: &str, url_safe: bool) -> String {
    base64_encode(text, alphabet(url_safe))
}

#[wasm_bindgen(js_name = base64Decode)]
pub fn base64_decode_js(encoded: &str, url_safe: bool) -> Result<String, JsValue> {
    base64_decode(encoded, alphabet(url_safe)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = hexEncode)]
pub fn hex_encode_js(text: &str) -> String {
    hex_encode(text)
}

#[wasm_bindgen(js_name = hexDecode)]
pub fn hex_decode_js(encoded: &str) -> Result<String, JsValue> {
    hex_decode(encoded).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = urlEncode)]
pub fn url_encode_js(text: &str) -> String {
    url_encode(text)
}

#[wasm_bindgen(js_name = urlDecode)]
pub fn url_decode_js(encoded: &str) -> Result<String, JsValue> {
    url_decode(encoded).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = jsonPretty)]
pub fn json_pretty_js(input: &str) -> Result<String, JsValue> {
    json_pretty(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = jsonMinify)]
pub fn json_minify_js(input: &str) -> Result<String, JsValue> {
    json_minify(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Styles the case-converter page offers, by dropdown value
#[wasm_bindgen(js_name = convertCase)]
pub fn convert_case_js(input: &str, style: &str) -> Result<String, JsValue> {
    let style = match style {
        "upper" => CaseStyle::Upper,
        "lower" => CaseStyle::Lower,
        "title" => CaseStyle::Title,
        "sentence" => CaseStyle::Sentence,
        "camel" => CaseStyle::Camel,
        "pascal" => CaseStyle::Pascal,
        "snake" => CaseStyle::Snake,
        "kebab" => CaseStyle::Kebab,
        other => return Err(JsValue::from_str(&format!("Unknown case style {:?}", other))),
    };
    Ok(convert_case(input, style))
}

#[wasm_bindgen(js_name = textStats)]
pub fn text_stats_js(text: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&text_stats(text))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
