//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 序列化器单元测试

use oxserial::{
    encoder_fn, AttributeMap, AttributeMapExt, Attributes, BaseSerializer, ItemSerializer,
    RenderContext, RenderOptions, Result, Serializer, SerializerError, MIME_TYPE_JSON,
};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

struct PersonSerializer {
    person: Person,
}

impl Serializer for PersonSerializer {
    fn attributes(&self) -> Result<Attributes> {
        Ok(AttributeMap::new()
            .with("name", self.person.name.as_str())
            .with("age", self.person.age)
            .into())
    }
}

impl ItemSerializer for PersonSerializer {
    type Object = Person;
    type Args = ();

    fn new(person: Person, _args: ()) -> Self {
        Self { person }
    }

    fn object(&self) -> &Person {
        &self.person
    }
}

struct CsvLikeSerializer(Person);

impl Serializer for CsvLikeSerializer {
    fn attributes(&self) -> Result<Attributes> {
        Ok(AttributeMap::new().with("name", self.0.name.as_str()).into())
    }

    fn mime_type(&self) -> &str {
        "application/vnd.api+json"
    }
}

fn ada() -> Person {
    Person {
        name: "Ada".to_string(),
        age: 30,
    }
}

/// 测试默认编码器输出
///
/// 验证属性按声明顺序输出且没有多余空白
#[test]
fn test_render_default_encoder() {
    let ctx = RenderContext::default();
    let out = PersonSerializer::new(ada(), ()).render(&ctx).unwrap();
    assert_eq!(out, r#"{"name":"Ada","age":30}"#);
}

/// 测试渲染结果等于编码器对属性的直接输出
#[test]
fn test_render_equals_encoder_output() {
    let ctx = RenderContext::default();
    let serializer = PersonSerializer::new(ada(), ());

    let direct = ctx
        .encoder()
        .encode(&serializer.attributes().unwrap(), &RenderOptions::default())
        .unwrap();
    assert_eq!(serializer.render(&ctx).unwrap(), direct);
}

/// 测试构造时对象被原样保存
#[test]
fn test_object_stored_verbatim() {
    let serializer = PersonSerializer::new(ada(), ());
    assert_eq!(serializer.object(), &ada());
}

/// 测试替换编码器后渲染使用新的编码器
#[test]
fn test_swapped_encoder_used_by_render() {
    let mut ctx = RenderContext::default();
    ctx.set_encoder(encoder_fn(|_, _| Ok("CUSTOM".to_string())));

    assert_eq!(
        PersonSerializer::new(ada(), ()).render(&ctx).unwrap(),
        "CUSTOM"
    );
    assert_eq!(
        CsvLikeSerializer(ada()).render(&ctx).unwrap(),
        "CUSTOM"
    );
}

/// 测试基础序列化器每次调用都返回未实现错误
#[test]
fn test_base_serializer_not_implemented() {
    let ctx = RenderContext::default();
    let base = BaseSerializer::new(ada(), ());

    for _ in 0..2 {
        assert!(base.attributes().unwrap_err().is_not_implemented());
        assert!(base.render(&ctx).unwrap_err().is_not_implemented());
    }
}

/// 测试内容类型
#[test]
fn test_mime_type_default_and_override() {
    assert_eq!(PersonSerializer::new(ada(), ()).mime_type(), MIME_TYPE_JSON);
    assert_eq!(
        CsvLikeSerializer(ada()).mime_type(),
        "application/vnd.api+json"
    );
    let other = Person {
        name: "Lin".to_string(),
        age: 41,
    };
    assert_eq!(
        CsvLikeSerializer(other).mime_type(),
        "application/vnd.api+json"
    );
}

/// 测试上下文选项会传给编码器
#[test]
fn test_context_options_reach_encoder() {
    let ctx = RenderContext::default().with_options(RenderOptions::pretty());
    let out = PersonSerializer::new(ada(), ()).render(&ctx).unwrap();
    assert_eq!(out, "{\n  \"name\": \"Ada\",\n  \"age\": 30\n}");
}

/// 测试过大的缩进返回编码错误而不是崩溃
#[test]
fn test_render_rejects_oversized_indent() {
    let ctx = RenderContext::default();
    let err = PersonSerializer::new(ada(), ())
        .render_with(&ctx, &RenderOptions::pretty().with_indent(usize::MAX))
        .unwrap_err();
    assert!(matches!(err, SerializerError::Encoding(_)));
}
