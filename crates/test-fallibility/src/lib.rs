#![no_std]
#![expect(non_snake_case)]

use core::{ffi::CStr, fmt, num::NonZeroUsize};

use textbuf::{
    allocator_api2::vec::Vec,
    settings::{BufferSettings, Settings},
    AllocError, Bounds, Global,
};

type Result<T = (), E = AllocError> = core::result::Result<T, E>;

type Buffer<'v> = textbuf::Buffer<'v, Global, BufferSettings>;
type Parts = Vec<textbuf::Buffer<'static, Global, BufferSettings>, Global>;

pub fn Buffer_new() -> Buffer<'static> {
    Buffer::new()
}

pub fn Buffer_try_with_capacity(capacity: usize) -> Result<Buffer<'static>> {
    Buffer::try_with_capacity(capacity)
}

pub fn Buffer_try_from_bytes(bytes: &[u8]) -> Result<Buffer<'static>> {
    Buffer::try_from_bytes(bytes)
}

pub fn Buffer_view(bytes: &mut [u8]) -> Buffer<'_> {
    Buffer::view(bytes)
}

pub fn Buffer_destroy(buffer: &mut Buffer) {
    buffer.destroy()
}

pub fn Buffer_get(buffer: &Buffer, index: isize) -> u8 {
    buffer.get(index)
}

pub fn Buffer_set(buffer: &mut Buffer, index: isize, byte: u8) -> u8 {
    buffer.set(index, byte)
}

pub fn Buffer_try_init(buffer: &mut Buffer, source: Option<&[u8]>, capacity: usize) -> Result {
    buffer.try_init(source, capacity)
}

pub fn Buffer_try_resize(buffer: &mut Buffer, new_capacity: usize) -> Result {
    buffer.try_resize(new_capacity)
}

pub fn Buffer_try_reserve(buffer: &mut Buffer, additional: usize) -> Result {
    buffer.try_reserve(additional)
}

pub fn Buffer_try_append(buffer: &mut Buffer, byte: u8) -> Result {
    buffer.try_append(byte)
}

pub fn Buffer_try_extend(buffer: &mut Buffer, other: &[u8]) -> Result<usize> {
    buffer.try_extend(other)
}

pub fn Buffer_write_fmt(buffer: &mut Buffer, args: fmt::Arguments) -> fmt::Result {
    fmt::Write::write_fmt(buffer, args)
}

pub fn Buffer_try_to_owned_buffer(buffer: &Buffer) -> Result<Buffer<'static>> {
    buffer.try_to_owned_buffer()
}

pub fn Buffer_find(buffer: &Buffer, needle: &[u8], bounds: Bounds) -> Option<usize> {
    buffer.find(needle, bounds)
}

pub fn Buffer_rfind(buffer: &Buffer, needle: &[u8], bounds: Bounds) -> Option<usize> {
    buffer.rfind(needle, bounds)
}

pub fn Buffer_count(buffer: &Buffer, needle: &[u8], bounds: Bounds) -> usize {
    buffer.count(needle, bounds)
}

pub fn Buffer_try_replace(buffer: &mut Buffer, old: &[u8], new: &[u8], limit: usize) -> Result<usize> {
    buffer.try_replace(old, new, limit)
}

pub fn Buffer_try_expand_tabs(buffer: &mut Buffer, tab_width: usize) -> Result<usize> {
    buffer.try_expand_tabs(tab_width)
}

pub fn Buffer_try_slice(buffer: &Buffer, start: isize, end: isize, step: isize) -> Result<Buffer<'static>> {
    buffer.try_slice(start, end, step)
}

pub fn Buffer_try_to_c_str<'a>(buffer: &'a mut Buffer) -> Result<&'a CStr> {
    buffer.try_to_c_str()
}

pub fn Buffer_strip(buffer: &mut Buffer, chars: Option<&[u8]>) {
    buffer.strip(chars)
}

pub fn Buffer_lstrip(buffer: &mut Buffer, chars: Option<&[u8]>) {
    buffer.lstrip(chars)
}

pub fn Buffer_rstrip(buffer: &mut Buffer, chars: Option<&[u8]>) {
    buffer.rstrip(chars)
}

pub fn Buffer_try_partition(buffer: &mut Buffer, separator: &[u8]) -> Result<Buffer<'static>> {
    buffer.try_partition(separator)
}

pub fn Buffer_try_rpartition(buffer: &mut Buffer, separator: &[u8]) -> Result<Buffer<'static>> {
    buffer.try_rpartition(separator)
}

pub fn Buffer_try_split(buffer: &Buffer, separator: &[u8], max_parts: NonZeroUsize) -> Result<Parts> {
    buffer.try_split(separator, max_parts)
}

pub fn Buffer_try_split_all(buffer: &Buffer, separator: &[u8]) -> Result<Parts> {
    buffer.try_split_all(separator)
}

pub fn Buffer_try_split_whitespace(buffer: &Buffer) -> Result<Parts> {
    buffer.try_split_whitespace()
}

pub fn Buffer_try_join(buffer: &mut Buffer, separator: &[u8], parts: &[&[u8]]) -> Result {
    buffer.try_join(separator, parts)
}

pub fn Buffer_try_join_buffers(buffer: &mut Buffer, separator: &[u8], parts: &Parts) -> Result {
    buffer.try_join(separator, parts)
}

pub fn Settings_growth_factor() -> usize {
    <BufferSettings as Settings>::GROWTH_FACTOR
}
