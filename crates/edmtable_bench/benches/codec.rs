//! Entity and table codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use edmtable_codec::{EdmTypeCodec, EntityCodec, TableCodec, TypeCodec, WireValue};
use edmtable_model::{EdmType, EdmValue, Entity};
use edmtable_testkit::{customer_entity, entity_list_payload, sample_entity, service_entity_payload};

/// Create an entity with `width` string properties.
fn wide_entity(width: usize) -> Entity {
    let mut entity = Entity::with_keys("bench", "row");
    for i in 0..width {
        entity.set_value(format!("Column{i}"), format!("value-{i}"));
    }
    entity
}

/// Benchmark encoding entities.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let codec = EntityCodec::new();

    group.bench_function("sample_entity", |b| {
        let entity = sample_entity();
        b.iter(|| {
            let result = codec.encode_entity(black_box(&entity)).unwrap();
            black_box(result);
        });
    });

    for width in [8, 64, 252].iter() {
        group.bench_with_input(BenchmarkId::new("wide", width), width, |b, &width| {
            let entity = wide_entity(width);
            b.iter(|| {
                let result = codec.encode_entity(black_box(&entity)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark decoding single entities and lists.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let codec = EntityCodec::new();

    group.bench_function("sample_entity", |b| {
        let payload = service_entity_payload(&sample_entity(), None);
        b.iter(|| {
            let result = codec.decode_entity(black_box(&payload)).unwrap();
            black_box(result);
        });
    });

    for count in [10, 100, 1000].iter() {
        let entities: Vec<Entity> = (0..*count).map(customer_entity).collect();
        let payload = entity_list_payload(&entities);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("list", count), &payload, |b, payload| {
            b.iter(|| {
                let result = codec.decode_entities(black_box(payload)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark roundtrip (encode + decode).
fn bench_roundtrip(c: &mut Criterion) {
    let codec = EntityCodec::new();

    c.bench_function("roundtrip_sample_entity", |b| {
        let entity = sample_entity();
        b.iter(|| {
            let encoded = codec.encode_entity(black_box(&entity)).unwrap();
            let decoded = codec.decode_entity(&encoded).unwrap();
            black_box(decoded);
        });
    });
}

/// Benchmark per-kind value conversion.
fn bench_type_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_codec");
    let types = EdmTypeCodec;

    for value in sample_entity().properties().filter_map(|(_, p)| p.value().cloned()) {
        let kind = value.edm_type();
        let wire = types.serialize(kind, &value).unwrap();
        group.bench_with_input(BenchmarkId::new("deserialize", kind), &wire, |b, wire| {
            b.iter(|| {
                let result = types.deserialize(kind, black_box(wire)).unwrap();
                black_box(result);
            });
        });
    }

    group.bench_function("infer_type", |b| {
        let wires = [
            WireValue::Null,
            WireValue::Bool(true),
            WireValue::Integer(5_000_000_000),
            WireValue::Number(1.5),
            WireValue::Text("text".into()),
        ];
        b.iter(|| {
            for wire in &wires {
                black_box(types.infer_type(black_box(wire)));
            }
        });
    });

    group.bench_function("serialize_int64", |b| {
        let value = EdmValue::Int64(i64::MAX);
        b.iter(|| {
            let result = types.serialize(EdmType::Int64, black_box(&value)).unwrap();
            black_box(result);
        });
    });

    group.finish();
}

/// Benchmark table payloads.
fn bench_table(c: &mut Criterion) {
    let codec = TableCodec::new();

    c.bench_function("table_name_roundtrip", |b| {
        b.iter(|| {
            let encoded = codec.encode_table_name(black_box("customers")).unwrap();
            let decoded = codec.decode_table_name(&encoded).unwrap();
            black_box(decoded);
        });
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_roundtrip,
    bench_type_codec,
    bench_table,
);

criterion_main!(benches);
