//! Browser-only checks for the session provider (`wasm-pack test --headless`)

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use sourcedevie_ui::UiError;
use sourcedevie_ui::state::load_user;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
fn stored_user_is_restored() {
    let key = "sourcedevie.test.restored";
    storage()
        .set_item(key, r#"{"id":"u-1","display_name":"Awa"}"#)
        .unwrap();

    let user = load_user(key).unwrap().unwrap();
    assert_eq!(user.display_name, "Awa");

    storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn missing_key_is_anonymous() {
    assert_eq!(load_user("sourcedevie.test.missing").unwrap(), None);
}

#[wasm_bindgen_test]
fn corrupt_record_is_a_decode_error() {
    let key = "sourcedevie.test.corrupt";
    storage().set_item(key, "{not json").unwrap();

    assert!(matches!(load_user(key), Err(UiError::SessionDecode(_))));

    storage().remove_item(key).unwrap();
}
