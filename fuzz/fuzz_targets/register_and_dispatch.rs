#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, u8)>, String, String)| {
    let mut router = routemap::Router::new();

    for (template, item) in data.0 {
        let methods = routemap::Method::ALL
            .into_iter()
            .filter(|method| item & (1 << *method as u8) != 0);

        if router.register(&template, template.clone(), methods).is_err() {
            return;
        }
    }

    if let Ok(matched) = router.dispatch(&data.1, &data.2) {
        let path = router.url_for(matched.handler, &matched.params).unwrap();
        assert_eq!(path, data.1);
    }
});
