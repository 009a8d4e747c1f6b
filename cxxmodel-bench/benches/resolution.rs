//! Type resolution benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use cxxmodel_bench::fixtures::{nested_node, wide_model};
use cxxmodel_codegen::TypeResolver;
use cxxmodel_schema::SchemaNode;
use std::hint::black_box;

fn benchmark_resolve_leaf(c: &mut Criterion) {
    let resolver = TypeResolver::default();
    let primitive = SchemaNode::integer();
    let model = SchemaNode::object_ref("order_item");

    c.bench_function("resolve_primitive", |b| {
        b.iter(|| resolver.resolve_schema_type(black_box(&primitive)))
    });

    c.bench_function("resolve_model_ref", |b| {
        b.iter(|| resolver.resolve_schema_type(black_box(&model)))
    });
}

fn benchmark_type_declaration(c: &mut Criterion) {
    let resolver = TypeResolver::default();
    let shallow = nested_node(2);
    let deep = nested_node(16);

    c.bench_function("declaration_depth_2", |b| {
        b.iter(|| resolver.get_type_declaration(black_box(&shallow)))
    });

    c.bench_function("declaration_depth_16", |b| {
        b.iter(|| resolver.get_type_declaration(black_box(&deep)))
    });
}

fn benchmark_model_imports(c: &mut Criterion) {
    let resolver = TypeResolver::default();
    let model = wide_model(32);

    c.bench_function("model_imports_32_properties", |b| {
        b.iter(|| resolver.model_imports(black_box(&model)))
    });
}

criterion_group!(
    benches,
    benchmark_resolve_leaf,
    benchmark_type_declaration,
    benchmark_model_imports
);
criterion_main!(benches);
