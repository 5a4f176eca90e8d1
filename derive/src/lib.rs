use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

#[proc_macro_derive(Reflect, attributes(autocodable))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  expand_reflect(&input)
    .unwrap_or_else(syn::Error::into_compile_error)
    .into()
}

/// Derives `Reflect` and an `AutoEncoded` impl that keeps every hook at its default.
#[proc_macro_derive(AutoEncoded, attributes(autocodable))]
pub fn derive_auto_encoded(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  let reflect = match expand_reflect(&input) {
    Ok(tokens) => tokens,
    Err(err) => return err.into_compile_error().into(),
  };
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  let expanded = quote! {
      #reflect

      impl #impl_generics ::autocodable_core_rs::AutoEncoded for #name #ty_generics #where_clause {}
  };

  TokenStream::from(expanded)
}

#[derive(Default)]
struct FieldOptions {
  skip: bool,
  parent: bool,
  read_only: bool,
}

impl FieldOptions {
  fn from_field(field: &syn::Field) -> syn::Result<Self> {
    let mut options = FieldOptions::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("autocodable")) {
      attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("skip") {
          options.skip = true;
        } else if meta.path.is_ident("parent") {
          options.parent = true;
        } else if meta.path.is_ident("read_only") {
          options.read_only = true;
        } else {
          return Err(meta.error("expected `skip`, `parent` or `read_only`"));
        }
        Ok(())
      })?;
    }
    if [options.skip, options.parent, options.read_only].iter().filter(|b| **b).count() > 1 {
      return Err(syn::Error::new_spanned(
        field,
        "`skip`, `parent` and `read_only` are mutually exclusive",
      ));
    }
    Ok(options)
  }
}

fn expand_reflect(input: &DeriveInput) -> syn::Result<TokenStream2> {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  let fields = match &input.data {
    Data::Struct(data) => match &data.fields {
      Fields::Named(named) => &named.named,
      _ => return Err(syn::Error::new_spanned(name, "Reflect requires a struct with named fields")),
    },
    _ => return Err(syn::Error::new_spanned(name, "Reflect can only be derived for structs")),
  };

  let mut declarations = Vec::new();
  let mut read_arms = Vec::new();
  let mut write_arms = Vec::new();
  let mut parent: Option<(&syn::Ident, &Type)> = None;

  for field in fields {
    let options = FieldOptions::from_field(field)?;
    let Some(ident) = field.ident.as_ref() else {
      return Err(syn::Error::new_spanned(field, "Reflect requires named fields"));
    };
    if options.skip {
      continue;
    }
    if options.parent {
      if parent.is_some() {
        return Err(syn::Error::new_spanned(field, "only one field can be marked `parent`"));
      }
      parent = Some((ident, &field.ty));
      continue;
    }

    let property = ident.to_string();
    let property = property.strip_prefix("r#").unwrap_or(&property).to_string();
    if options.read_only {
      declarations.push(quote! { ::autocodable_core_rs::PropertyDeclaration::read_only(#property) });
    } else {
      declarations.push(quote! { ::autocodable_core_rs::PropertyDeclaration::read_write(#property) });
      write_arms.push(quote! {
          #property => {
              self.#ident = ::autocodable_core_rs::FromValue::from_value(value).map_err(|source| {
                  ::autocodable_core_rs::TypeMismatchError::new(::std::any::type_name::<Self>(), name, source)
              })?;
              Ok(())
          }
      });
    }
    read_arms.push(quote! {
        #property => ::autocodable_core_rs::ToValue::to_value(&self.#ident).map_err(|source| {
            ::autocodable_core_rs::EngineError::from(::autocodable_core_rs::TypeMismatchError::new(
                ::std::any::type_name::<Self>(),
                name,
                source,
            ))
        }),
    });
  }

  let (parent_info, read_fallback, write_fallback) = match parent {
    Some((ident, ty)) => (
      quote! {
          Some(<#ty as ::autocodable_core_rs::Reflect>::type_info as fn() -> ::autocodable_core_rs::TypeInfo)
      },
      quote! { ::autocodable_core_rs::Reflect::read_property(&self.#ident, other) },
      quote! { ::autocodable_core_rs::Reflect::write_property(&mut self.#ident, other, value) },
    ),
    None => (
      quote! { None },
      quote! {
          Err(::autocodable_core_rs::EngineError::unknown_property(::std::any::type_name::<Self>(), other))
      },
      quote! {
          {
              let _ = value;
              Err(::autocodable_core_rs::EngineError::unknown_property(::std::any::type_name::<Self>(), other))
          }
      },
    ),
  };

  Ok(quote! {
      impl #impl_generics ::autocodable_core_rs::Reflect for #name #ty_generics #where_clause {
          fn type_info() -> ::autocodable_core_rs::TypeInfo {
              const DECLARED: &[::autocodable_core_rs::PropertyDeclaration] = &[#(#declarations),*];
              ::autocodable_core_rs::TypeInfo::new(
                  ::autocodable_core_rs::TypeRef::of::<Self>(),
                  DECLARED,
                  #parent_info,
              )
          }

          fn read_property(&self, name: &str) -> ::std::result::Result<::autocodable_core_rs::Value, ::autocodable_core_rs::EngineError> {
              match name {
                  #(#read_arms)*
                  other => #read_fallback,
              }
          }

          fn write_property(
              &mut self,
              name: &str,
              value: ::autocodable_core_rs::Value,
          ) -> ::std::result::Result<(), ::autocodable_core_rs::EngineError> {
              match name {
                  #(#write_arms)*
                  other => #write_fallback,
              }
          }
      }
  })
}
