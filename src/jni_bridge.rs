// ============================================================================
// JNI entry points for the Android app
// ============================================================================
//
// Package: com.example.vulkaninfoapp.MainActivity
//
// The report tree is turned into Java objects by one recursive walk: each
// node becomes `new <Class>()` and each field is assigned with the JNI
// signature its value type implies. Optional fields the class doesn't
// declare are skipped; any other JNI failure returns null to Java.
// ============================================================================

use crate::backend::InstanceSettings;
use crate::bridge;
use crate::config::Config;
use crate::report::schema::{java_class, Node, Value};
use jni::errors::Result as JniResult;
use jni::objects::{JClass, JObject, JString, JValue};
use jni::sys::{jobject, jsize, jstring};
use jni::JNIEnv;
use std::ptr;

const LOG_TAG: &str = "vulkaninfo";

/// There is no config.toml on the device, so release builds use the default
/// `debug.log_level`; debug builds log everything down to Debug.
fn log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        Config::default().log_level()
    }
}

fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log_level())
            .with_tag(LOG_TAG),
    );
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    match env.get_string(value) {
        Ok(s) => Some(s.into()),
        Err(e) => {
            log::error!("JNI: failed to read string argument: {}", e);
            None
        }
    }
}

/// Java signature:
/// private native static String initInstance(String appName, String engineName);
///
/// Creates and destroys an instance; returns the application name on
/// success, null otherwise.
#[no_mangle]
pub extern "system" fn Java_com_example_vulkaninfoapp_MainActivity_initInstance(
    mut env: JNIEnv,
    _class: JClass,
    app_name: JString,
    engine_name: JString,
) -> jstring {
    init_logging();

    let (Some(app_name), Some(engine_name)) =
        (read_string(&mut env, &app_name), read_string(&mut env, &engine_name))
    else {
        return ptr::null_mut();
    };

    let Some(name) = bridge::ping(&app_name, &engine_name) else {
        return ptr::null_mut();
    };

    match env.new_string(name) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            log::error!("JNI: failed to create result string: {}", e);
            ptr::null_mut()
        }
    }
}

/// Java signature:
/// private native static VkInfo getVkInfo(String appName, String engineName);
///
/// Full report for the first physical device, or null.
#[no_mangle]
pub extern "system" fn Java_com_example_vulkaninfoapp_MainActivity_getVkInfo(
    mut env: JNIEnv,
    _class: JClass,
    app_name: JString,
    engine_name: JString,
) -> jobject {
    init_logging();

    let (Some(app_name), Some(engine_name)) =
        (read_string(&mut env, &app_name), read_string(&mut env, &engine_name))
    else {
        return ptr::null_mut();
    };

    let settings = InstanceSettings::new(app_name, engine_name);
    let Some(info) = bridge::query_vk_info(&settings, 0, false) else {
        return ptr::null_mut();
    };

    match node_to_object(&mut env, &info.to_node()) {
        Ok(object) => object.into_raw(),
        Err(e) => {
            log::error!("JNI: failed to build VkInfo object: {}", e);
            // Don't leave a pending exception behind a null return
            let _ = env.exception_clear();
            ptr::null_mut()
        }
    }
}

fn node_to_object<'local>(env: &mut JNIEnv<'local>, node: &Node) -> JniResult<JObject<'local>> {
    let class = env.find_class(java_class(node.class))?;
    let object = env.new_object(&class, "()V", &[])?;

    for field in &node.fields {
        let signature = field.value.jni_signature();
        if field.optional && env.get_field_id(&class, field.name, &signature).is_err() {
            // NoSuchFieldError (or a missing element class) is pending
            env.exception_clear()?;
            log::debug!("JNI: {} has no field {} {}, skipping", node.class, field.name, signature);
            continue;
        }

        match &field.value {
            Value::Int(v) => env.set_field(&object, field.name, signature, JValue::Int(*v))?,
            Value::Unsigned(v) => env.set_field(&object, field.name, signature, JValue::Long(*v as i64))?,
            Value::Signed(v) => env.set_field(&object, field.name, signature, JValue::Long(*v))?,
            Value::Float(v) => env.set_field(&object, field.name, signature, JValue::Float(*v))?,
            Value::Bool(v) => env.set_field(&object, field.name, signature, JValue::Bool(u8::from(*v)))?,
            other => {
                let child = value_to_object(env, other)?;
                env.set_field(&object, field.name, signature, JValue::Object(&child))?;
                env.delete_local_ref(child)?;
            }
        }
    }

    env.delete_local_ref(class)?;
    Ok(object)
}

/// Reference-typed values: strings, arrays and nested objects
fn value_to_object<'local>(env: &mut JNIEnv<'local>, value: &Value) -> JniResult<JObject<'local>> {
    let object = match value {
        Value::Text(text) => env.new_string(text)?.into(),
        Value::UnsignedArray(values) => {
            let longs: Vec<i64> = values.iter().map(|&v| v as i64).collect();
            let array = env.new_long_array(longs.len() as jsize)?;
            env.set_long_array_region(&array, 0, &longs)?;
            array.into()
        }
        Value::FloatArray(values) => {
            let array = env.new_float_array(values.len() as jsize)?;
            env.set_float_array_region(&array, 0, values)?;
            array.into()
        }
        Value::TextArray(values) => {
            let array = env.new_object_array(values.len() as jsize, "java/lang/String", JObject::null())?;
            for (index, text) in values.iter().enumerate() {
                let element = env.new_string(text)?;
                env.set_object_array_element(&array, index as jsize, &element)?;
                env.delete_local_ref(element)?;
            }
            array.into()
        }
        Value::Object(node) => node_to_object(env, node)?,
        Value::ObjectArray { class, items } => {
            let element_class = env.find_class(java_class(class))?;
            let array = env.new_object_array(items.len() as jsize, &element_class, JObject::null())?;
            env.delete_local_ref(element_class)?;
            for (index, item) in items.iter().enumerate() {
                let element = node_to_object(env, item)?;
                env.set_object_array_element(&array, index as jsize, &element)?;
                env.delete_local_ref(element)?;
            }
            array.into()
        }
        Value::Int(_) | Value::Unsigned(_) | Value::Signed(_) | Value::Float(_) | Value::Bool(_) => JObject::null(),
    };
    Ok(object)
}
