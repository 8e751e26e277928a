// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::ptr;

use jni::{
    JNIEnv,
    errors::Result as JniResult,
    objects::{JByteArray, JClass, JIntArray},
    sys::{jint, jintArray, jsize},
};

use crate::Error;

#[unsafe(no_mangle)]
extern "system" fn Java_dev_strata_TextIndex_suffixArray<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
) -> jintArray {
    let Ok(text) = read_byte_array(&mut env, &text) else {
        return ptr::null_mut();
    };

    match crate::suffix_array(&text) {
        Ok(sa) => emit_ints(&mut env, sa.iter().map(|&v| v as jint).collect()),
        Err(e) => throw(&mut env, &e),
    }
}

#[unsafe(no_mangle)]
extern "system" fn Java_dev_strata_TextIndex_suffixArrayUtf8<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
) -> jintArray {
    let Ok(text) = read_byte_array(&mut env, &text) else {
        return ptr::null_mut();
    };

    match crate::suffix_array_utf8(&text) {
        Ok(sa) => emit_ints(&mut env, sa.iter().map(|&v| v as jint).collect()),
        Err(e) => throw(&mut env, &e),
    }
}

#[unsafe(no_mangle)]
extern "system" fn Java_dev_strata_TextIndex_bwt<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
) -> jintArray {
    let Ok(text) = read_byte_array(&mut env, &text) else {
        return ptr::null_mut();
    };

    match crate::bwt(&text) {
        Ok(bwt) => emit_ints(&mut env, bwt.iter().map(|&b| jint::from(b)).collect()),
        Err(e) => throw(&mut env, &e),
    }
}

#[unsafe(no_mangle)]
extern "system" fn Java_dev_strata_TextIndex_bwtUtf8<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
) -> jintArray {
    let Ok(text) = read_byte_array(&mut env, &text) else {
        return ptr::null_mut();
    };

    match crate::bwt_utf8(&text) {
        Ok(bwt) => emit_ints(&mut env, bwt.iter().map(|&v| v as jint).collect()),
        Err(e) => throw(&mut env, &e),
    }
}

#[unsafe(no_mangle)]
extern "system" fn Java_dev_strata_TextIndex_lcpArray<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
    sa: JIntArray<'local>,
) -> jintArray {
    let Ok(text) = read_byte_array(&mut env, &text) else {
        return ptr::null_mut();
    };
    let Ok(sa) = read_suffix_array(&mut env, &sa) else {
        return ptr::null_mut();
    };

    match crate::lcp_array(&text, &sa) {
        Ok(lcp) => emit_ints(&mut env, lcp),
        Err(e) => throw(&mut env, &e),
    }
}

#[unsafe(no_mangle)]
extern "system" fn Java_dev_strata_TextIndex_lcpArrayUtf8<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    text: JByteArray<'local>,
    sa: JIntArray<'local>,
) -> jintArray {
    let Ok(text) = read_byte_array(&mut env, &text) else {
        return ptr::null_mut();
    };
    let Ok(sa) = read_suffix_array(&mut env, &sa) else {
        return ptr::null_mut();
    };

    match crate::lcp_array_utf8(&text, &sa) {
        Ok(lcp) => emit_ints(&mut env, lcp),
        Err(e) => throw(&mut env, &e),
    }
}

fn read_byte_array(env: &mut JNIEnv, array: &JByteArray) -> JniResult<Vec<u8>> {
    let len: usize = env.get_array_length(array)?.try_into().unwrap_or(0);

    let mut buf = vec![0u8; len];
    env.get_byte_array_region(array, 0, bytemuck::cast_slice_mut::<u8, i8>(&mut buf))?;

    Ok(buf)
}

/// Reads a Java int array as suffix offsets.
///
/// Negative entries wrap to values above `i32::MAX`, which the permutation validation rejects.
fn read_suffix_array(env: &mut JNIEnv, array: &JIntArray) -> JniResult<Vec<u32>> {
    let len: usize = env.get_array_length(array)?.try_into().unwrap_or(0);

    let mut buf = vec![0; len];
    env.get_int_array_region(array, 0, &mut buf)?;

    Ok(buf.iter().map(|&v| v as u32).collect())
}

fn emit_ints(env: &mut JNIEnv, values: Vec<jint>) -> jintArray {
    let Ok(array) = env.new_int_array(values.len() as jsize) else {
        return ptr::null_mut();
    };
    if env.set_int_array_region(&array, 0, &values).is_err() {
        return ptr::null_mut();
    }

    array.into_raw()
}

fn throw(env: &mut JNIEnv, error: &Error) -> jintArray {
    let class = match error {
        Error::Sort(_) => "java/lang/RuntimeException",
        _ => "java/lang/IllegalArgumentException",
    };

    // If raising the exception itself fails there is nothing more we can report
    let _ = env.throw_new(class, error.to_string());

    ptr::null_mut()
}
