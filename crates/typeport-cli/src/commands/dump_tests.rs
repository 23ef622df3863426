use tempfile::TempDir;

use super::dump::{DumpArgs, dump};
use super::model_loader::load_model;
use super::test_utils::{SHOP, classpath, project};

fn args(dir: &TempDir, input: &str) -> DumpArgs {
    DumpArgs {
        classpath: classpath(dir),
        input: input.to_owned(),
        output: None,
        source_root: None,
    }
}

fn run(args: &DumpArgs) -> String {
    let model = load_model(&args.classpath).unwrap();
    let mut out = Vec::new();
    dump(args, &model, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn pretty_json_of_translated_types() {
    let dir = project(SHOP);
    let json = run(&args(&dir, "Entity"));

    insta::assert_snapshot!(json.trim_end(), @r#"
    {
      "seed": "com.shop.model.Entity",
      "types": [
        {
          "kind": "interface",
          "name": "Entity",
          "qualified_name": "com.shop.model.Entity",
          "output_path": null,
          "extends": null,
          "fields": [
            {
              "name": "id",
              "ty": "number"
            }
          ],
          "imports": []
        }
      ]
    }
    "#);
}

#[test]
fn closure_order_and_enum_values() {
    let dir = project(SHOP);
    let json: serde_json::Value = serde_json::from_str(&run(&args(&dir, "Customer"))).unwrap();

    let names: Vec<_> = json["types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ty| ty["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Entity", "OrderStatus", "Order", "Customer"]);

    let status = &json["types"][1];
    assert_eq!(status["kind"], "enum");
    assert_eq!(status["values"][0]["value"], "\"open\"");
    assert_eq!(status["values"][2]["name"], "LOST");
    assert!(status["values"][2]["value"].is_null());

    let customer = &json["types"][3];
    assert_eq!(customer["extends"], "Entity");
    assert_eq!(
        customer["imports"],
        serde_json::json!(["com.shop.model.Entity", "com.shop.model.Order"])
    );
}

#[test]
fn output_paths_follow_the_layout() {
    let dir = project(SHOP);
    let web = dir.path().join("web");
    let args = DumpArgs {
        output: Some(web.clone()),
        source_root: Some("src/main/java".to_owned()),
        ..args(&dir, "OrderStatus")
    };
    let json: serde_json::Value = serde_json::from_str(&run(&args)).unwrap();

    let expected = web.join("com/shop/model/order-status.ts");
    assert_eq!(
        json["types"][0]["output_path"],
        expected.display().to_string()
    );
}

#[test]
fn ambiguous_seed_is_an_error() {
    let dir = project(SHOP);
    let args = args(&dir, "Order");
    let model = load_model(&args.classpath).unwrap();

    let err = dump(&args, &model, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("2 declarations match 'Order'"));
}
