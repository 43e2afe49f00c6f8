//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了oxserial的宏实现，为序列化器结构体生成 `ItemSerializer` 实现。

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Ident, Type};

#[derive(FromDeriveInput)]
#[darling(attributes(serializer), supports(struct_named))]
struct SerializerInput {
    ident: Ident,
    generics: syn::Generics,
    data: ast::Data<(), SerializerField>,
}

#[derive(FromField)]
#[darling(attributes(serializer))]
struct SerializerField {
    ident: Option<Ident>,
    ty: Type,
    /// 保存领域对象的字段
    #[darling(default)]
    object: bool,
    /// 保存附加参数的字段
    #[darling(default)]
    args: bool,
}

/// 为具名字段结构体生成 `ItemSerializer` 实现
///
/// 标记 `#[serializer(object)]` 的字段（未标记时取第一个字段）保存领域对象，
/// 标记 `#[serializer(args)]` 的字段保存附加参数，其余字段使用 `Default` 初始化。
///
/// ```ignore
/// #[derive(ItemSerializer)]
/// struct UserSerializer {
///     user: User,
///     #[serializer(args)]
///     locale: String,
/// }
/// ```
#[proc_macro_derive(ItemSerializer, attributes(serializer))]
pub fn derive_item_serializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let parsed = SerializerInput::from_derive_input(input)?;
    let fields = parsed
        .data
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum").with_span(&parsed.ident))?
        .fields;

    if fields.is_empty() {
        return Err(darling::Error::custom(
            "ItemSerializer requires a field holding the serialized object",
        )
        .with_span(&parsed.ident));
    }

    let marked: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.object)
        .map(|(i, _)| i)
        .collect();
    let object_idx = match marked.as_slice() {
        [] => fields.iter().position(|f| !f.args).ok_or_else(|| {
            darling::Error::custom("no field left to hold the serialized object")
                .with_span(&parsed.ident)
        })?,
        [idx] => *idx,
        _ => {
            return Err(darling::Error::custom(
                "only one field may be marked #[serializer(object)]",
            )
            .with_span(&parsed.ident))
        }
    };

    let args_fields: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.args)
        .map(|(i, _)| i)
        .collect();
    if args_fields.len() > 1 {
        return Err(darling::Error::custom(
            "only one field may be marked #[serializer(args)]",
        )
        .with_span(&parsed.ident));
    }
    let args_idx = args_fields.first().copied();
    if args_idx == Some(object_idx) {
        return Err(darling::Error::custom(
            "a field cannot hold both the object and the args",
        )
        .with_span(&parsed.ident));
    }

    let object_field = &fields[object_idx];
    let object_ident = &object_field.ident;
    let object_ty = &object_field.ty;

    let (args_ty, args_param) = match args_idx {
        Some(idx) => {
            let ty = &fields[idx].ty;
            (quote! { #ty }, quote! { args })
        }
        None => (quote! { () }, quote! { _args }),
    };

    let inits = fields.iter().enumerate().map(|(i, f)| {
        let ident = &f.ident;
        if i == object_idx {
            quote! { #ident: object }
        } else if Some(i) == args_idx {
            quote! { #ident: args }
        } else {
            quote! { #ident: ::core::default::Default::default() }
        }
    });

    let name = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::oxserial::ItemSerializer for #name #ty_generics #where_clause {
            type Object = #object_ty;
            type Args = #args_ty;

            fn new(object: Self::Object, #args_param: Self::Args) -> Self {
                Self {
                    #(#inits),*
                }
            }

            fn object(&self) -> &Self::Object {
                &self.#object_ident
            }
        }
    })
}
