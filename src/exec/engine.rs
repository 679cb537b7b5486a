//! Embedded JavaScript engine bridge
//!
//! Each run gets a fresh `boa_engine` context. The source is compiled with
//! the engine's own `Function` constructor as the body of a function taking a
//! single `console` parameter, and called with the capture console. Nothing
//! is installed on the global object.
//!
//! There is no instruction limit or timeout: a script that never returns
//! blocks the calling thread.

use boa_engine::object::ObjectInitializer;
use boa_engine::{
    js_string, Context, JsError, JsNativeError, JsObject, JsResult, JsString, JsValue,
    NativeFunction,
};
use boa_gc::{Finalize, Trace};

use super::capture::{CaptureLog, LogEntry, LogLevel, LogValue};

/// Run `source` with `log` behind its `console` parameter.
///
/// Returns the string form of any thrown or compile-time error.
pub fn run(source: &str, log: &CaptureLog) -> Result<(), String> {
    let mut context = Context::default();
    let console = build_console(log, &mut context);

    let outcome = compile(source, &mut context).and_then(|func| {
        func.call(&JsValue::undefined(), &[console.into()], &mut context)
    });

    match outcome {
        Ok(_) => Ok(()),
        Err(err) => Err(describe_error(&err, &mut context)),
    }
}

/// `new Function("console", source)`
fn compile(source: &str, context: &mut Context) -> JsResult<JsObject> {
    let ctor = context.global_object().get(js_string!("Function"), context)?;
    let ctor = ctor
        .as_callable()
        .ok_or_else(|| JsNativeError::typ().with_message("Function constructor unavailable"))?;

    let args = [js_string!("console").into(), JsString::from(source).into()];
    let func = ctor.call(&JsValue::undefined(), &args, context)?;
    func.as_callable()
        .ok_or_else(|| JsNativeError::typ().with_message("compiled source is not callable").into())
}

fn build_console(log: &CaptureLog, context: &mut Context) -> JsObject {
    let mut console = ObjectInitializer::new(context);
    for level in LogLevel::ALL {
        console.function(level_method(level, log.clone()), JsString::from(level.name()), 0);
    }
    console.function(clear_method(log.clone()), js_string!("clear"), 0);
    console.build()
}

/// Native state behind one console level method. Holds no engine values.
#[derive(Trace, Finalize)]
struct LevelSink {
    #[unsafe_ignore_trace]
    level: LogLevel,
    #[unsafe_ignore_trace]
    log: CaptureLog,
}

#[derive(Trace, Finalize)]
struct ClearSink {
    #[unsafe_ignore_trace]
    log: CaptureLog,
}

fn level_method(level: LogLevel, log: CaptureLog) -> NativeFunction {
    NativeFunction::from_copy_closure_with_captures(
        |_this, args, sink: &LevelSink, context| {
            let values = args.iter().map(|arg| capture_value(arg, context)).collect();
            sink.log.push(LogEntry::new(sink.level, values));
            Ok(JsValue::undefined())
        },
        LevelSink { level, log },
    )
}

fn clear_method(log: CaptureLog) -> NativeFunction {
    NativeFunction::from_copy_closure_with_captures(
        |_this, _args, sink: &ClearSink, _context| {
            sink.log.clear();
            Ok(JsValue::undefined())
        },
        ClearSink { log },
    )
}

/// Convert one console argument to display text without ever throwing
fn capture_value(value: &JsValue, context: &mut Context) -> LogValue {
    match value.as_object() {
        Some(obj) if !obj.is_callable() => match stringify(value, context) {
            Ok(text) => LogValue::Structured(text.unwrap_or_default()),
            Err(_) => LogValue::Opaque(display(value, context)),
        },
        _ => LogValue::Scalar(display(value, context)),
    }
}

/// `JSON.stringify(value, null, 2)`; `None` when it yields `undefined`
fn stringify(value: &JsValue, context: &mut Context) -> JsResult<Option<String>> {
    let json = context.global_object().get(js_string!("JSON"), context)?;
    let Some(json_obj) = json.as_object() else {
        return Ok(None);
    };
    let func = json_obj.get(js_string!("stringify"), context)?;
    let Some(func) = func.as_callable() else {
        return Ok(None);
    };
    let out = func.call(&json, &[value.clone(), JsValue::null(), JsValue::new(2)], context)?;
    Ok(out.as_string().map(|s| s.to_std_string_escaped()))
}

/// `String(value)`, falling back to the engine's debug display
fn display(value: &JsValue, context: &mut Context) -> String {
    match value.to_string(context) {
        Ok(s) => s.to_std_string_escaped(),
        Err(_) => value.display().to_string(),
    }
}

fn describe_error(err: &JsError, context: &mut Context) -> String {
    let thrown = err.to_opaque(context);
    match thrown.to_string(context) {
        Ok(s) => s.to_std_string_escaped(),
        Err(_) => err.to_string(),
    }
}
