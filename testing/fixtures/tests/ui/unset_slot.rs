use shapegen_testing_fixtures::*;

async fn get_widget(input: GetWidgetInput) -> Result<GetWidgetOutput, GetWidgetError> {
    Err(WidgetNotFound { id: input.id }.into())
}

fn main() {
    let _service = WidgetService::builder()
        .get_widget(get_widget)
        .build::<String, (), ()>();
}
