extern crate conv_evolution;

#[cfg(test)]
mod test {
    use conv_evolution::convolution::{ConvolutionNetworkFactory, NeuralCalculator, Network, Pipes};
    use conv_evolution::trainer::{Trainer, TrainerSettings, TrainingData, WriteBack};
    use conv_evolution::Error;

    struct Echo {
        value: f64,
    }

    impl NeuralCalculator for Echo {
        fn calculate(&mut self) {
            self.value += 1.0;
        }
    }

    fn two_by_two() -> Network {
        let factory = ConvolutionNetworkFactory::new(1.0, 2, 2).unwrap();
        let mut pipes = Pipes::new();
        let inputs = pipes.create_many(2);
        let outputs = pipes.create_many(2);
        factory.construct(pipes, &inputs, &outputs).unwrap()
    }

    fn zeros() -> Vec<TrainingData> {
        vec![
            TrainingData::new(vec![1.0, 2.0], vec![0.0, 0.0]),
            TrainingData::new(vec![3.0, 4.0], vec![0.0, 0.0]),
            TrainingData::new(vec![-1.0, -2.0], vec![0.0, 0.0]),
        ]
    }

    fn settings() -> TrainerSettings {
        TrainerSettings {
            population_size: 20,
            mutation_rate: 0.2,
            crossover_rate: 0.7,
            seed: Some(42),
            ..TrainerSettings::standard()
        }
    }

    #[test]
    fn training_learns_to_output_zeros() {
        let mut network = two_by_two();
        let mut trainer = Trainer::new(settings()).unwrap();

        let initial = trainer.fitness(&mut network, &zeros()).unwrap();
        let report = trainer.train(&mut network, &zeros(), 20).unwrap();
        let trained = trainer.fitness(&mut network, &zeros()).unwrap();

        assert_eq!(report.generations.len(), 20);
        assert!(trained <= initial);
        assert_eq!(Some(trained), report.best_fitness());
    }

    #[test]
    fn training_keeps_the_wiring() {
        let mut network = two_by_two();
        let inputs = network.inputs();
        let outputs = network.outputs();
        let wiring: Vec<Vec<_>> = network.layers().iter().map(|l| l.iter().flat_map(|n| n.input_pipes()).collect()).collect();

        let mut trainer = Trainer::new(settings()).unwrap();
        trainer.train(&mut network, &zeros(), 5).unwrap();

        assert_eq!(network.inputs(), inputs);
        assert_eq!(network.outputs(), outputs);
        let after: Vec<Vec<_>> = network.layers().iter().map(|l| l.iter().flat_map(|n| n.input_pipes()).collect()).collect();
        assert_eq!(after, wiring);
    }

    #[test]
    fn output_biases_only_write_back() {
        let mut network = two_by_two();
        let mut trainer = Trainer::new(TrainerSettings { write_back: WriteBack::OutputBiasesOnly, ..settings() }).unwrap();
        trainer.train(&mut network, &zeros(), 5).unwrap();
        assert!(network
            .layers()
            .iter()
            .all(|l| l.iter().all(|n| n.inputs().values().all(|b| b.name() == "Passthrough"))));
    }

    #[test]
    fn foreign_calculators_are_rejected() {
        let mut echo = Echo { value: 0.0 };
        let mut trainer = Trainer::new(settings()).unwrap();
        assert_eq!(trainer.train(&mut echo, &zeros(), 5).unwrap_err(), Error::UnsupportedNetwork);
        assert_eq!(trainer.fitness(&mut echo, &zeros()).unwrap_err(), Error::UnsupportedNetwork);
        assert_eq!(echo.value, 0.0);
    }

    #[test]
    fn identity_single_layer_has_zero_fitness() {
        let factory = ConvolutionNetworkFactory::new(0.0, 1, 4).unwrap();
        let mut pipes = Pipes::new();
        let inputs = pipes.create_many(4);
        let outputs = pipes.create_many(4);
        let mut network = factory.construct(pipes, &inputs, &outputs).unwrap();

        let data = vec![
            TrainingData::new(vec![0.25, -3.0, 8.0, 1.5], vec![0.25, -3.0, 8.0, 1.5]),
            TrainingData::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]),
        ];
        let trainer = Trainer::new(settings()).unwrap();
        assert_eq!(trainer.fitness(&mut network, &data).unwrap(), 0.0);
    }
}
